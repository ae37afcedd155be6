use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::forms::{FormAction, FormState, ValidationRule};

#[derive(Properties, PartialEq)]
pub struct AuthFormInputProps {
    /// The enclosing form's state handle.
    pub form: UseReducerHandle<FormState>,
    /// Field name the input binds to.
    pub name: AttrValue,
    /// Label above the input.
    pub label: AttrValue,
    /// Icon shown inside the input.
    pub icon: IconId,
    /// Render a masked password input instead of text.
    #[prop_or_default]
    pub is_password: bool,
    /// Ordered validation rules; the first failure is displayed.
    #[prop_or_default]
    pub rules: Vec<ValidationRule>,
    /// Placeholder text.
    #[prop_or_default]
    pub placeholder: AttrValue,
    /// Names of fields whose edits re-trigger this field's rules.
    #[prop_or_default]
    pub dependencies: Vec<AttrValue>,
    /// Show a success mark once the field is touched and valid.
    #[prop_or_default]
    pub has_feedback: bool,
}

/// Labeled, icon-prefixed input bound by name into the enclosing form.
#[function_component(AuthFormInput)]
pub fn auth_form_input(props: &AuthFormInputProps) -> Html {
    {
        // (re-)register the rule list; messages follow the active language
        let form = props.form.clone();
        let field = props.name.to_string();
        let rules = props.rules.clone();
        let dependencies: Vec<String> = props
            .dependencies
            .iter()
            .map(ToString::to_string)
            .collect();
        use_effect_with(
            (
                props.name.clone(),
                props.rules.clone(),
                props.dependencies.clone(),
            ),
            move |_| {
                form.dispatch(FormAction::Register {
                    field,
                    rules,
                    dependencies,
                });
                || ()
            },
        );
    }

    let value = props.form.value(&props.name).to_string();
    let error = props.form.error(&props.name).map(ToString::to_string);
    let has_error = error.is_some();
    let show_feedback = props.has_feedback
        && !has_error
        && props.form.is_touched(&props.name)
        && !value.is_empty();

    let oninput = {
        let form = props.form.clone();
        let field = props.name.to_string();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.dispatch(FormAction::Input {
                    field: field.clone(),
                    value: input.value(),
                });
            }
        })
    };

    let onblur = {
        let form = props.form.clone();
        let field = props.name.to_string();
        Callback::from(move |_event: FocusEvent| {
            form.dispatch(FormAction::Blur {
                field: field.clone(),
            });
        })
    };

    html! {
        <div class="form-control w-full">
            <label class="label" for={props.name.clone()}>
                <span class="label-text font-semibold">{ props.label.clone() }</span>
            </label>
            <label class={classes!(
                "input",
                "input-bordered",
                "flex",
                "items-center",
                "gap-2",
                has_error.then_some("input-error"),
                show_feedback.then_some("input-success"),
            )}>
                <Icon icon_id={props.icon} class="w-4 h-4 opacity-50" />
                <input
                    id={props.name.clone()}
                    name={props.name.clone()}
                    class="grow"
                    type={if props.is_password { "password" } else { "text" }}
                    value={value}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                    {onblur}
                />
                if show_feedback {
                    <Icon icon_id={IconId::HeroiconsMiniSolidCheckCircle} class="w-4 h-4 text-success" />
                }
            </label>
            if let Some(message) = error {
                <span class="label-text-alt text-error mt-1">{ message }</span>
            }
        </div>
    }
}
