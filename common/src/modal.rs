use tracing::{Level, debug, instrument, warn};

use crate::config::ModalConfig;
use crate::page::Page;

// contact modals
//
// each trigger opens its own panel and panels are independent, so nothing stops two of them
// being open at once.  a panel closes from any close control inside it, or from a click that
// lands on the overlay itself rather than on its content
#[derive(Clone, Debug)]
pub struct ContactModals<N> {
    // (trigger, panel) pairs where both elements exist
    pub triggers: Vec<(N, N)>,
    pub panels: Vec<N>,
    pub closes: Vec<N>,
    config: ModalConfig,
}

impl<N: Clone + PartialEq> ContactModals<N> {
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn attach<P: Page<Node = N>>(page: &P, config: &ModalConfig) -> Option<Self> {
        let triggers: Vec<(N, N)> = config
            .bindings
            .iter()
            .filter_map(|binding| {
                let trigger = page.element_by_id(&binding.trigger_id);
                let panel = page.element_by_id(&binding.modal_id);

                match (trigger, panel) {
                    (Some(trigger), Some(panel)) => Some((trigger, panel)),
                    _ => {
                        debug!(
                            { trigger = %binding.trigger_id, modal = %binding.modal_id },
                            "skipping incomplete modal binding"
                        );
                        None
                    }
                }
            })
            .collect();

        let panels = page.elements_with_class(&config.modal_class);
        let closes = page.elements_with_class(&config.close_class);

        if triggers.is_empty() && panels.is_empty() {
            return None;
        }

        debug!(
            { triggers = triggers.len(), panels = panels.len(), closes = closes.len() },
            "attached contact modals"
        );

        Some(ContactModals {
            triggers,
            panels,
            closes,
            config: config.clone(),
        })
    }

    // opens the panel bound to the trigger; returns false for an unknown trigger
    pub fn open<P: Page<Node = N>>(&self, page: &P, trigger: &N) -> bool {
        match self.triggers.iter().find(|(t, _)| t == trigger) {
            Some((_, panel)) => {
                page.add_class(panel, &self.config.active_class);
                true
            }
            None => false,
        }
    }

    // closes the panel enclosing the clicked close control
    pub fn on_close_click<P: Page<Node = N>>(&self, page: &P, target: &N) -> bool {
        match page.closest_with_class(target, &self.config.modal_class) {
            Some(panel) => {
                page.remove_class(&panel, &self.config.active_class);
                true
            }
            None => {
                warn!("close control outside of any modal");
                false
            }
        }
    }

    // closes the panel only if the click landed on the overlay itself
    pub fn on_overlay_click<P: Page<Node = N>>(&self, page: &P, panel: &N, target: &N) -> bool {
        if target != panel {
            return false;
        }

        page.remove_class(panel, &self.config.active_class);
        true
    }

    pub fn is_open<P: Page<Node = N>>(&self, page: &P, panel: &N) -> bool {
        page.has_class(panel, &self.config.active_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakePage, NodeId};

    struct Fixture {
        page: FakePage,
        wechat_btn: NodeId,
        wechat: NodeId,
        wechat_content: NodeId,
        wechat_close: NodeId,
        qq_btn: NodeId,
        qq: NodeId,
    }

    fn fixture() -> Fixture {
        let page = FakePage::new();

        let wechat_btn = page.add(None, &["contact__button"], &[("id", "wechat-btn")]);
        let qq_btn = page.add(None, &["contact__button"], &[("id", "qq-btn")]);

        let wechat = page.add(None, &["modal"], &[("id", "wechat-modal")]);
        let wechat_content = page.add(Some(wechat), &["modal__content"], &[]);
        let close = page.add(Some(wechat_content), &["modal__close"], &[]);
        let wechat_close = page.add(Some(close), &["bx", "bx-x"], &[]);

        let qq = page.add(None, &["modal"], &[("id", "qq-modal")]);
        let qq_content = page.add(Some(qq), &["modal__content"], &[]);
        page.add(Some(qq_content), &["modal__close"], &[]);

        Fixture {
            page,
            wechat_btn,
            wechat,
            wechat_content,
            wechat_close,
            qq_btn,
            qq,
        }
    }

    #[test]
    fn trigger_opens_its_panel() {
        let f = fixture();
        let modals = ContactModals::attach(&f.page, &ModalConfig::default()).unwrap();

        assert_eq!(modals.triggers.len(), 2);
        assert_eq!(modals.panels.len(), 2);
        assert_eq!(modals.closes.len(), 2);

        assert!(modals.open(&f.page, &f.wechat_btn));
        assert!(modals.is_open(&f.page, &f.wechat));
        assert!(!modals.is_open(&f.page, &f.qq));
    }

    #[test]
    fn panels_are_independent() {
        let f = fixture();
        let modals = ContactModals::attach(&f.page, &ModalConfig::default()).unwrap();

        modals.open(&f.page, &f.wechat_btn);
        modals.open(&f.page, &f.qq_btn);

        assert!(modals.is_open(&f.page, &f.wechat));
        assert!(modals.is_open(&f.page, &f.qq));
    }

    #[test]
    fn overlay_click_closes_but_content_click_does_not() {
        let f = fixture();
        let modals = ContactModals::attach(&f.page, &ModalConfig::default()).unwrap();
        modals.open(&f.page, &f.wechat_btn);

        assert!(!modals.on_overlay_click(&f.page, &f.wechat, &f.wechat_content));
        assert!(modals.is_open(&f.page, &f.wechat));

        assert!(modals.on_overlay_click(&f.page, &f.wechat, &f.wechat));
        assert!(!modals.is_open(&f.page, &f.wechat));
    }

    #[test]
    fn close_control_closes_enclosing_panel_only() {
        let f = fixture();
        let modals = ContactModals::attach(&f.page, &ModalConfig::default()).unwrap();
        modals.open(&f.page, &f.wechat_btn);
        modals.open(&f.page, &f.qq_btn);

        // the click usually lands on the icon inside the close control
        assert!(modals.on_close_click(&f.page, &f.wechat_close));
        assert!(!modals.is_open(&f.page, &f.wechat));
        assert!(modals.is_open(&f.page, &f.qq));
    }

    #[test]
    fn stray_close_control_is_a_no_op() {
        let f = fixture();
        let stray = f.page.add(None, &["modal__close"], &[]);
        let modals = ContactModals::attach(&f.page, &ModalConfig::default()).unwrap();

        assert!(!modals.on_close_click(&f.page, &stray));
    }

    #[test]
    fn incomplete_bindings_are_skipped() {
        let page = FakePage::new();
        let btn = page.add(None, &[], &[("id", "wechat-btn")]);
        page.add(None, &[], &[("id", "qq-btn")]);
        page.add(None, &["modal"], &[("id", "qq-modal")]);

        let modals = ContactModals::attach(&page, &ModalConfig::default()).unwrap();

        assert_eq!(modals.triggers.len(), 1);
        assert!(!modals.open(&page, &btn));
    }

    #[test]
    fn page_without_modals_is_inert() {
        let page = FakePage::new();
        assert!(ContactModals::attach(&page, &ModalConfig::default()).is_none());
    }
}
