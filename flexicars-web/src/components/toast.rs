//! Toast notifications. `ToastHost` owns the live notices and hands a [`Notifier`]
//! to its subtree; every toast runs its own timer and removes itself.
use crate::dom::{BrowserSleep, EventListener};
use flexicars_core::{
    Notice, NoticeBoard, NoticeId, NoticeStage, NoticeTiming, Severity, Sleep,
    connectivity_notice,
};
use std::rc::Rc;
use yew::prelude::*;

pub enum NoticeAction {
    Push { message: String, severity: Severity },
    Expire(NoticeId),
}

/// Reducer wrapper around a [`NoticeBoard`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeFeed(NoticeBoard);

impl NoticeFeed {
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        self.0.notices()
    }
}

impl Reducible for NoticeFeed {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = self.0.clone();
        match action {
            NoticeAction::Push { message, severity } => {
                board.push(message, severity);
            }
            NoticeAction::Expire(id) => {
                if !board.remove(id) {
                    return self;
                }
            }
        }
        Rc::new(Self(board))
    }
}

/// Handle for raising toasts from anywhere under a [`ToastHost`].
#[derive(Clone, PartialEq)]
pub struct Notifier(UseReducerDispatcher<NoticeFeed>);

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.0.dispatch(NoticeAction::Push {
            message: message.into(),
            severity,
        });
    }
}

#[hook]
pub fn use_notifier() -> Option<Notifier> {
    use_context::<Notifier>()
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub timing: NoticeTiming,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let feed = use_reducer(NoticeFeed::default);
    let notifier = Notifier(feed.dispatcher());
    let on_expire = {
        let dispatcher = feed.dispatcher();
        Callback::from(move |id: NoticeId| dispatcher.dispatch(NoticeAction::Expire(id)))
    };
    html! {
        <ContextProvider<Notifier> context={notifier}>
            { props.children.clone() }
            <div class="toast-stack" aria-live="polite">
                { for feed.notices().iter().map(|notice| html! {
                    <ToastItem
                        key={notice.id}
                        notice={notice.clone()}
                        timing={props.timing}
                        on_expire={on_expire.clone()}
                    />
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub notice: Notice,
    pub timing: NoticeTiming,
    pub on_expire: Callback<NoticeId>,
}

#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    let stage = use_state_eq(NoticeStage::default);
    {
        let stage = stage.setter();
        let on_expire = props.on_expire.clone();
        let timing = props.timing;
        use_effect_with(props.notice.id, move |id| {
            let id = *id;
            wasm_bindgen_futures::spawn_local(async move {
                for (wait, next) in timing.steps() {
                    BrowserSleep.sleep(wait).await;
                    match next {
                        Some(next) => stage.set(next),
                        None => on_expire.emit(id),
                    }
                }
            });
            || ()
        });
    }
    let notice = &props.notice;
    html! {
        <div
            class={classes!("alert", notice.severity.class(), "toast-notification")}
            role="status"
            style={stage.transform()}
        >
            { notice.message.clone() }
        </div>
    }
}

/// Raises a toast whenever the browser goes online or offline.
#[function_component(ConnectivityWatcher)]
pub fn connectivity_watcher() -> Html {
    let notifier = use_notifier();
    use_effect_with(notifier, |notifier| {
        let listeners = notifier.clone().map(|notifier| {
            let on_online = {
                let notifier = notifier.clone();
                EventListener::on_window("online", move |_| {
                    let (message, severity) = connectivity_notice(true);
                    notifier.notify(message, severity);
                })
            };
            let on_offline = EventListener::on_window("offline", move |_| {
                let (message, severity) = connectivity_notice(false);
                notifier.notify(message, severity);
            });
            (on_online, on_offline)
        });
        move || drop(listeners)
    });
    Html::default()
}
