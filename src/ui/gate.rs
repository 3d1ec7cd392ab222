/// Authorization gate wrapped around the editor

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;

// Host page decides who may use the editor
#[wasm_bindgen(module = "/editor.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn isAuthorized() -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Checking,
    Admitted,
    Denied,
}

impl GateState {
    /// Only an explicit `true` from the host admits the user
    pub fn from_answer(answer: Option<bool>) -> GateState {
        match answer {
            Some(true) => GateState::Admitted,
            _ => GateState::Denied,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthGateProps {
    pub children: Children,
}

#[function_component(AuthGate)]
pub fn auth_gate(props: &AuthGateProps) -> Html {
    let state = use_state(|| GateState::Checking);

    // Ask the host once on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let answer = match isAuthorized().await {
                    Ok(value) => value.as_bool(),
                    Err(e) => {
                        log::error!("Authorization check failed: {:?}", e);
                        None
                    }
                };

                let next = GateState::from_answer(answer);
                log::info!("Authorization gate: {:?}", next);
                state.set(next);
            });
            || ()
        });
    }

    match *state {
        GateState::Checking => html! {
            <div class="loading-text-center">
                <Spinner />
                <p class="loading-text">{"Checking access..."}</p>
            </div>
        },
        GateState::Admitted => html! {
            <>{props.children.clone()}</>
        },
        GateState::Denied => html! {
            <div class="gate-denied">
                <Alert r#type={AlertType::Warning} title={"Not authorized"} inline={true}>
                    {"You do not have access to the domain editor."}
                </Alert>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_true_admits() {
        assert_eq!(GateState::from_answer(Some(true)), GateState::Admitted);
        assert_eq!(GateState::from_answer(Some(false)), GateState::Denied);
        assert_eq!(GateState::from_answer(None), GateState::Denied);
    }
}
