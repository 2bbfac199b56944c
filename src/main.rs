use anyhow::Result;
use veil_anim::{
    ClassSet, PlaybackEvent, StylesheetError, StylesheetHost, TransitionConfig,
    TransitionDuration, TransitionState, UiAnimation,
};

/// Stand-in document that accepts any stylesheet name.
struct ConsoleDocument;

impl StylesheetHost for ConsoleDocument {
    fn attach_stylesheet(&mut self, name: &str) -> Result<(), StylesheetError> {
        println!("attached stylesheet {name:?}");
        Ok(())
    }
}

fn main() -> Result<()> {
    // Optional path to a TOML config; defaults to a fade-and-slide.
    let config = match std::env::args().nth(1) {
        Some(path) => TransitionConfig::load(path)?,
        None => TransitionConfig::new(vec![
            TransitionState::Opacity0,
            TransitionState::TranslateLeft,
        ])
        .with_duration(TransitionDuration::Ms1000)
        .with_delay_s(0.2),
    };

    let total_s = config.delay_s + config.duration.seconds() + 0.1;
    let elements = vec![ClassSet::new(), ClassSet::new()];
    let mut anim = UiAnimation::new(config, elements);

    anim.start(&mut ConsoleDocument);

    let step_s = 0.05;
    let mut elapsed_s = 0.0;
    while elapsed_s <= total_s {
        anim.update(step_s);
        elapsed_s += step_s;
        for event in anim.drain_events() {
            match event {
                PlaybackEvent::BaseClassApplied { class }
                | PlaybackEvent::FadeOutApplied { class } => {
                    println!("t={elapsed_s:.2}s applied {class}");
                }
                other => println!("t={elapsed_s:.2}s {other:?}"),
            }
        }
    }

    let leftover: Vec<_> = anim
        .scheduler()
        .elements()
        .iter()
        .flat_map(|el| el.classes())
        .collect();
    println!("final classes: {leftover:?}");

    Ok(())
}
