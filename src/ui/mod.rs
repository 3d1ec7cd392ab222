/// UI module exports
use yew::prelude::*;

use crate::config::EditorConfig;

pub mod components;
pub mod editor;
pub mod gate;

use editor::ListingEditor;
use gate::AuthGate;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: EditorConfig,
}

/// Editor page behind the authorization gate
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <AuthGate>
            <ListingEditor config={props.config.clone()} />
        </AuthGate>
    }
}
