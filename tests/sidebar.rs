// SPDX-License-Identifier: MPL-2.0
//! Sidebar layout policy and active-link highlighting.

use shelfwise::ui::sidebar::{
    self, all_items, link_appearance, LinkAppearance, Message, Panel, State, MENU_ITEMS,
};

fn state(mobile: bool, collapsed: bool) -> State {
    let mut state = State::new(collapsed);
    if mobile {
        state.set_mobile(true);
        if !collapsed {
            sidebar::update(Message::Toggle, &mut state);
        }
    }
    state
}

#[test]
fn layout_policy_table() {
    let cases = [
        (false, false, Panel::Expanded, false, false),
        (false, true, Panel::Narrow, false, false),
        (true, false, Panel::Expanded, true, false),
        (true, true, Panel::Hidden, false, true),
    ];

    for (mobile, collapsed, panel, overlay, floating_button) in cases {
        let layout = state(mobile, collapsed).layout();
        assert_eq!(layout.panel, panel, "mobile={mobile} collapsed={collapsed}");
        assert_eq!(layout.overlay, overlay, "mobile={mobile} collapsed={collapsed}");
        assert_eq!(
            layout.floating_button, floating_button,
            "mobile={mobile} collapsed={collapsed}"
        );
    }
}

#[test]
fn overlay_click_closes_mobile_panel() {
    let mut state = state(true, false);
    let event = sidebar::update(Message::OverlayPressed, &mut state);

    assert_eq!(event, sidebar::Event::Toggled { collapsed: true });
    assert!(state.layout().floating_button);
}

#[test]
fn floating_button_reopens_panel() {
    let mut state = state(true, true);
    sidebar::update(Message::Toggle, &mut state);
    assert_eq!(state.layout().panel, Panel::Expanded);
    assert!(state.layout().overlay);
}

#[test]
fn leaving_mobile_restores_desktop_collapse() {
    let mut state = State::new(true);
    assert!(state.set_mobile(true));
    sidebar::update(Message::Toggle, &mut state);
    assert!(state.set_mobile(false));
    assert!(state.collapsed());
    assert_eq!(state.layout().panel, Panel::Narrow);
}

#[test]
fn exactly_one_menu_link_is_active_per_section() {
    for location in ["/", "/inventory", "/inventory/new", "/reports", "/employees"] {
        let active = all_items()
            .filter(|item| link_appearance(item.path, location, false).is_active())
            .count();
        assert_eq!(active, 1, "location {location}");
    }
}

#[test]
fn dashboard_link_only_matches_root() {
    let dashboard = MENU_ITEMS[0].path;
    assert!(link_appearance(dashboard, "/", false).is_active());
    assert_eq!(
        link_appearance(dashboard, "/inventory", false),
        LinkAppearance::Inactive
    );
}

#[test]
fn indicator_hidden_while_collapsed() {
    assert!(link_appearance("/inventory", "/inventory/new", false).has_border_indicator());
    let collapsed = link_appearance("/inventory", "/inventory/new", true);
    assert!(collapsed.is_active());
    assert!(!collapsed.has_border_indicator());
}
