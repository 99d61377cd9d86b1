use super::{FooterGroup, FooterItem};
use crate::app::state::PaletteState;

pub fn get_groups(state: &PaletteState) -> Vec<FooterGroup> {
    if !state.visible {
        return vec![FooterGroup {
            name: "APP",
            items: vec![
                FooterItem {
                    key: "Ctrl+K",
                    desc: "commands",
                },
                FooterItem {
                    key: "q",
                    desc: "quit",
                },
            ],
        }];
    }

    let mut groups = vec![FooterGroup {
        name: "PALETTE",
        items: vec![
            FooterItem {
                key: "Enter",
                desc: "run",
            },
            FooterItem {
                key: "Esc",
                desc: "close",
            },
        ],
    }];

    if state.focused && !state.suggestions.items.is_empty() {
        groups.push(FooterGroup {
            name: "PICK",
            items: vec![
                FooterItem {
                    key: "\u{2191}/\u{2193}",
                    desc: "select",
                },
                FooterItem {
                    key: "Tab",
                    desc: "run selected",
                },
            ],
        });
    }
    groups
}
