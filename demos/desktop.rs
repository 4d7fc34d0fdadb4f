//! Desktop Demo: icons on a desktop, arrow-key selection, a modal.
//!
//! Demonstrates:
//! - Boxes, auto-sized and fixed-size labels, glyph icons
//! - Rebuilding the scene from a key handler
//! - Ctrl-C restoring the cursor on exit
//!
//! Logs go to stderr; run with `RUST_LOG=debug ... 2>desktop.log`.

use tcanvas::{Border, Color, Engine, IconVariant, Key, Node, Position, Scene, Size, Style};
use tracing_subscriber::EnvFilter;

const ITEM_WIDTH: u16 = 12;
const ITEM_HEIGHT: u16 = 6;
const ITEM_GAP: u16 = 14;
const BASE_X: u16 = 5;

struct Entry {
    name: &'static str,
    icon: IconVariant,
}

const ENTRIES: [Entry; 4] = [
    Entry {
        name: "(trash)",
        icon: IconVariant::Trash,
    },
    Entry {
        name: "src",
        icon: IconVariant::Directory,
    },
    Entry {
        name: "README.md",
        icon: IconVariant::File,
    },
    Entry {
        name: "Cargo.toml",
        icon: IconVariant::File,
    },
];

struct Desktop {
    width: u16,
    height: u16,
    selected: usize,
    modal: Option<bool>,
}

impl Desktop {
    fn handle(&mut self, key: &Key) {
        match (self.modal, key) {
            (Some(_), Key::Esc | Key::Enter) => self.modal = None,
            (Some(_), Key::ArrowLeft) => self.modal = Some(false),
            (Some(_), Key::ArrowRight) => self.modal = Some(true),
            (None, Key::ArrowLeft) => self.selected = self.selected.saturating_sub(1),
            (None, Key::ArrowRight) => self.selected = (self.selected + 1).min(ENTRIES.len() - 1),
            (None, Key::Enter) => self.modal = Some(true),
            _ => {}
        }
    }

    fn build(&self) -> Vec<Node> {
        let mut nodes = vec![
            Node::boxed(Position::new(1, 1), Size::new(self.width, self.height))
                .with_style(Style::new().border(Border::solid().with_color(Color::Gray))),
            Node::sized_label(Position::new(5, 2), Size::new(7, 1), "desktop")
                .with_style(Style::new().color(Color::Cyan)),
            Node::label(
                Position::new(5, self.height.saturating_sub(4)),
                "move: ← →   open: enter   quit: ctrl-c",
            )
            .with_style(Style::new().border(Border::dotted().with_color(Color::Gray))),
        ];

        for (i, entry) in (0u16..).zip(ENTRIES.iter()) {
            let x = BASE_X + i * ITEM_GAP;
            let mut frame = Style::new();
            if usize::from(i) == self.selected {
                frame = frame.border(Border::solid().with_color(Color::Cyan));
            }
            let size = Size::new(ITEM_WIDTH, ITEM_HEIGHT);
            nodes.push(Node::boxed(Position::new(x, 4), size).with_style(frame));
            nodes.push(Node::icon(entry.icon, Position::new(x, 4), size));
            nodes.push(Node::sized_label(
                Position::new(x, 4 + ITEM_HEIGHT),
                Size::new(ITEM_WIDTH, 1),
                entry.name,
            ));
        }

        if let Some(yes) = self.modal {
            nodes.extend(self.modal_nodes(yes));
        }
        nodes
    }

    fn modal_nodes(&self, yes: bool) -> Vec<Node> {
        let (w, h) = (30, 7);
        let x = self.width.saturating_sub(w) / 2 + 1;
        let y = self.height.saturating_sub(h) / 2 + 1;
        let name = ENTRIES[self.selected].name;

        vec![
            Node::boxed(Position::new(x, y), Size::new(w, h)).with_style(
                Style::new()
                    .border(Border::double().with_color(Color::Red))
                    .background(Color::Black),
            ),
            Node::sized_label(
                Position::new(x + 2, y + 2),
                Size::new(w - 4, 1),
                format!("Open {name}?"),
            ),
            Node::sized_label(
                Position::new(x + 5, y + 4),
                Size::new(5, 1),
                if yes { "no" } else { "[no]" },
            ),
            Node::sized_label(
                Position::new(x + 20, y + 4),
                Size::new(5, 1),
                if yes { "[yes]" } else { "yes" },
            ),
        ]
    }
}

fn main() -> tcanvas::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (width, height) = crossterm::terminal::size()?;
    let mut desktop = Desktop {
        width,
        height,
        selected: 0,
        modal: None,
    };

    let mut engine = Engine::new(Scene::from(desktop.build()));
    engine.on_key(move |key: &Key, scene: &mut Scene| {
        desktop.handle(key);
        scene.replace(desktop.build());
    });

    engine.run()
}
