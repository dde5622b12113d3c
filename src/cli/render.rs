//! Widget markup command

use anyhow::{Result, bail};
use clap::ValueEnum;

use snabbalexin::widgets::{self, MarkupSink, Page};

use super::Paths;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Widget {
    Daily,
    Mistakes,
    Progress,
}

impl Widget {
    fn container(&self) -> &'static str {
        match self {
            Self::Daily => widgets::DAILY_CONTAINER,
            Self::Mistakes => widgets::MISTAKES_CONTAINER,
            Self::Progress => widgets::PROGRESS_CONTAINER,
        }
    }
}

pub fn render_command(paths: &Paths, widget: Widget) -> Result<()> {
    let app = paths.open_app()?;
    let container = widget.container();
    let mut page = Page::with_containers([container]);
    let sink: &mut dyn MarkupSink = &mut page;

    let rendered = match widget {
        Widget::Daily => widgets::render_daily_challenge_widget(sink, container, app.daily()),
        Widget::Mistakes => widgets::render_mistakes_review(sink, container, app.mistakes()),
        Widget::Progress => widgets::render_progress_widget(sink, container, app.progress()),
    };

    match page.contents(container) {
        Some(markup) if rendered => println!("{}", markup),
        _ => bail!("Container {} missing", container),
    }
    Ok(())
}
