use std::path::PathBuf;

use anyhow::{Context, Result};
use field_comparator::{ComparatorConfig, FieldContainer, Page, PageController, PageSelectors};
use field_diff::render_plain;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let page_path = PathBuf::from(
        args.next()
            .context("usage: show_changes <page.html> [config.toml]")?,
    );
    let config = match args.next() {
        Some(path) => ComparatorConfig::load(&PathBuf::from(path))?,
        None => ComparatorConfig::default(),
    };

    let html = std::fs::read_to_string(&page_path)
        .with_context(|| format!("failed to read {}", page_path.display()))?;
    let selectors = PageSelectors::compile(&config.selectors)?;
    let mut page = Page::parse(&html, &selectors);
    info!("Loaded {} fields from {}", page.fields().len(), page_path.display());

    let mut controller = PageController::from_config(&config);
    println!("Button: {}", controller.button_label());

    let label = controller.on_toggle_clicked(page.fields_mut()).to_string();
    println!("Button: {}", label);
    for (i, field) in page.fields().iter().enumerate() {
        let current = field_comparator::extract_current_text(field.current());
        let history = field_comparator::extract_comparable_text(field.history());
        println!("Field {}:", i + 1);
        println!("  {}", render_plain(&controller.comparator().compute_diff(&history, &current)));
        println!("  {}", field.diff_region().markup());
    }

    let label = controller.on_toggle_clicked(page.fields_mut());
    println!("Button: {}", label);

    Ok(())
}
