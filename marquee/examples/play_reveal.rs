use marquee::{BrandReveal, RevealConfig, Seconds, build_stage};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = RevealConfig::default();
    let (mut stage, targets) = build_stage(&config);
    let label = targets
        .label
        .ok_or_else(|| anyhow::anyhow!("stage has no label node"))?;
    let mut reveal = BrandReveal::build(config, &targets)?;

    println!("cue sheet:");
    for cue in reveal.cue_sheet() {
        println!("  {:>5.2}s  {}", cue.at.0, cue.text);
    }

    let dt = 1.0 / 60.0;
    let mut last = String::new();
    for step in 0..(8.0 / dt) as u32 {
        let t = f64::from(step) * dt;
        reveal.advance_to(Seconds(t), &mut stage)?;
        let Some(node) = stage.node(label) else {
            continue;
        };
        if node.text != last {
            last = node.text.clone();
            println!(
                "{t:>5.2}s  [{:?}] \"{last}\" (opacity {:.2})",
                reveal.phase_at(Seconds(t)),
                node.props.opacity
            );
        }
    }

    reveal.teardown();
    Ok(())
}
