//! Accessible dialog shell shared by the claim dialogs.
use crate::a11y::{restore_focus, trap_focus_in};
use crate::i18n::t;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static DIALOG_SEQ: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    /// Backdrop click, close button and Escape all emit this.
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    /// Extra class on the dialog box, e.g. a tone modifier.
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub actions: Html,
    #[prop_or_default]
    pub children: Children,
}

/// Element ids for one dialog instance.
struct DialogIds {
    root: String,
    title: String,
    description: String,
}

impl DialogIds {
    fn new(seq: usize) -> Self {
        Self {
            root: format!("dialog-{seq}"),
            title: format!("dialog-{seq}-title"),
            description: format!("dialog-{seq}-desc"),
        }
    }
}

/// Focus the dialog when it opens and hand focus back when it closes.
#[hook]
fn use_dialog_focus(open: bool, root: NodeRef, root_id: String, return_focus: Option<AttrValue>) {
    let was_open = use_mut_ref(|| false);
    use_effect_with((open, return_focus), move |(open, return_focus)| {
        let previously = was_open.replace(*open);
        if *open {
            if let Some(el) = root.cast::<web_sys::HtmlElement>() {
                let _ = el.set_attribute("tabindex", "-1");
                let _ = el.focus();
            }
            trap_focus_in(&root_id);
        } else if previously && let Some(id) = return_focus {
            restore_focus(id);
        }
        || {}
    });
}

fn emit_on_escape(on_close: &Callback<()>) -> Callback<KeyboardEvent> {
    let on_close = on_close.clone();
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            e.prevent_default();
            on_close.emit(());
        }
    })
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let seq = use_state(|| DIALOG_SEQ.fetch_add(1, Ordering::Relaxed));
    let ids = DialogIds::new(*seq);
    let root = use_node_ref();
    use_dialog_focus(
        props.open,
        root.clone(),
        ids.root.clone(),
        props.return_focus_id.clone(),
    );

    if !props.open {
        return Html::default();
    }

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop.
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let described_by = props
        .description
        .as_ref()
        .map(|_| AttrValue::from(ids.description.clone()));

    html! {
        <div class="dialog-backdrop" role="presentation" onclick={close.clone()}>
            <div
                id={ids.root}
                class={classes!("dialog", props.class.clone())}
                role="dialog"
                aria-modal="true"
                aria-labelledby={ids.title.clone()}
                aria-describedby={described_by}
                onclick={swallow_click}
                onkeydown={emit_on_escape(&props.on_close)}
                ref={root}
            >
                <header class="dialog__header">
                    <h2 id={ids.title}>{ props.title.clone() }</h2>
                    <button type="button" class="dialog__close" aria-label={t("modal.close")} onclick={close}>
                        {"×"}
                    </button>
                </header>
                if let Some(desc) = props.description.clone() {
                    <p id={ids.description} class="dialog__description">{ desc }</p>
                }
                <div class="dialog__body">{ for props.children.iter() }</div>
                <footer class="dialog__actions">{ props.actions.clone() }</footer>
            </div>
        </div>
    }
}
