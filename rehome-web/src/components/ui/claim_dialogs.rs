//! Confirm and success dialogs for the claim flow. Stateless; the grid owns
//! visibility and the target name.
use crate::components::modal::Modal;
use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

fn with_name(key: &str, name: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("name", name);
    i18n::tr(key, Some(&args))
}

#[derive(Properties, PartialEq, Clone)]
pub struct ClaimConfirmProps {
    pub open: bool,
    pub item_name: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ClaimConfirmDialog)]
pub fn claim_confirm_dialog(props: &ClaimConfirmProps) -> Html {
    let confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let actions = html! {
        <>
            <button type="button" class="btn btn--ghost claim-cancel" onclick={cancel}>
                { i18n::t("claim.cancel") }
            </button>
            <button type="button" class="btn btn--primary claim-confirm" onclick={confirm}>
                { i18n::t("claim.confirm") }
            </button>
        </>
    };

    html! {
        <Modal
            open={props.open}
            title={i18n::t("claim.confirm_title")}
            description={AttrValue::from(with_name("claim.confirm_body", &props.item_name))}
            on_close={props.on_cancel.clone()}
            class={classes!("claim-dialog", "claim-dialog--confirm")}
            {actions}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ClaimSuccessProps {
    pub open: bool,
    pub item_name: AttrValue,
    pub on_dismiss: Callback<()>,
}

#[function_component(ClaimSuccessDialog)]
pub fn claim_success_dialog(props: &ClaimSuccessProps) -> Html {
    let dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let actions = html! {
        <button type="button" class="btn btn--primary claim-done" onclick={dismiss}>
            { i18n::t("claim.done") }
        </button>
    };

    html! {
        <Modal
            open={props.open}
            title={i18n::t("claim.success_title")}
            description={AttrValue::from(with_name("claim.success_body", &props.item_name))}
            on_close={props.on_dismiss.clone()}
            class={classes!("claim-dialog", "claim-dialog--success")}
            {actions}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn confirm_dialog_shows_target_name_when_open() {
        i18n::set_lang("en");
        let props = ClaimConfirmProps {
            open: true,
            item_name: AttrValue::from("Lamp"),
            on_confirm: Callback::noop(),
            on_cancel: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ClaimConfirmDialog>::with_props(props).render());
        assert!(html.contains("Claim this item?"));
        assert!(html.contains("Lamp"));
        assert!(html.contains("claim-confirm"));
        assert!(html.contains("claim-cancel"));
    }

    #[test]
    fn dialogs_render_nothing_when_closed() {
        i18n::set_lang("en");
        let confirm = ClaimConfirmProps {
            open: false,
            item_name: AttrValue::from("Lamp"),
            on_confirm: Callback::noop(),
            on_cancel: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ClaimConfirmDialog>::with_props(confirm).render());
        assert!(!html.contains("dialog-backdrop"));

        let success = ClaimSuccessProps {
            open: false,
            item_name: AttrValue::from("Lamp"),
            on_dismiss: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ClaimSuccessDialog>::with_props(success).render());
        assert!(!html.contains("dialog-backdrop"));
    }

    #[test]
    fn success_dialog_has_single_acknowledgement() {
        i18n::set_lang("en");
        let props = ClaimSuccessProps {
            open: true,
            item_name: AttrValue::from("Yoga Mat"),
            on_dismiss: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ClaimSuccessDialog>::with_props(props).render());
        assert!(html.contains("Item claimed!"));
        assert!(html.contains("Yoga Mat"));
        assert!(html.contains("claim-done"));
        assert!(!html.contains("claim-confirm"));
    }
}
