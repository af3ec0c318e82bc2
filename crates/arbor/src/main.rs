use anyhow::Context;
use arbor_view::{InspectorOverlay, PointerEvent, View};
use camino::Utf8PathBuf;
use clap::Parser;

#[derive(Parser)]
enum Options {
    /// Load a serialized parse tree, initialize the view and print it.
    Show { path: Utf8PathBuf },
    /// Simulate a hover over the node covering a byte offset and print the
    /// inspector panel.
    Inspect {
        path: Utf8PathBuf,
        #[arg(long)]
        offset: u32,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Options::parse() {
        Options::Show { path } => {
            let view = init_view(&path)?;
            print!("{}", view.document().debug_dump());
        }
        Options::Inspect { path, offset } => {
            let mut view = init_view(&path)?;
            let id = view
                .document()
                .covering_node(offset.into())
                .with_context(|| format!("no node covers offset {offset}"))?;
            view.handle(PointerEvent::Enter(id));
            print!("{}", view.overlay().render());
        }
    }

    Ok(())
}

fn init_view(path: &Utf8PathBuf) -> anyhow::Result<View> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))?;
    let doc = arbor_load::load_str(&text)?;
    Ok(View::new(doc, InspectorOverlay::new()))
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    #[test]
    fn show_renders_the_demo_tree() {
        let path =
            Utf8PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/let-binding.json"));
        let view = init_view(&path).unwrap();

        expect![[r#"
            root
              group
                function@0..24 #has-children #expanded #container
                  toggle "▼"
                  children
                    token@0..3 "fun main() let x = 9 end"
                    identifier@4..8 "main"
                    token@8..9 "("
                    token@9..10 ")"
                    function-body@11..20 #container
                      toggle "▼"
                      children
                        statement@11..20
                          let@11..20 #has-children #container
                            toggle "▼"
                            children
                              token@11..14 "let x = 9"
                              identifier@15..16 "x"
                              token@17..18 "="
                              integer@19..20 "9"
                    token@21..24 "end"
        "#]]
        .assert_eq(&view.document().debug_dump());
    }
}
