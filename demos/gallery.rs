//! flexrow gallery - every FlexibleRow variation on one scrolling screen
//!
//! Tab / Shift-Tab move focus, Enter or Space activates, clicks work when
//! the terminal reports the mouse. Pass --log-dir (or set FLEXROW_LOG_DIR)
//! to capture logs; --help lists every setting.

use anyhow::{Context, Result};
use clap::Parser;
use flexrow::{
    App, Binding, Color, Config, ControlButton, ControlRadio, ControlToggle, FlexibleRow, Font,
    Image, ListView, Section, Stack, State, Text,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Screen state owned by the gallery
struct Gallery {
    has_notifications: State<bool>,
    is_dark_mode: State<bool>,
    sort_order: State<usize>,
    is_favourite: State<bool>,
    scroll: State<usize>,
}

impl Gallery {
    fn new() -> Self {
        Gallery {
            has_notifications: State::new(true),
            is_dark_mode: State::new(true),
            sort_order: State::new(0),
            is_favourite: State::new(false),
            scroll: State::new(0),
        }
    }

    fn build(&self) -> Stack {
        let list = ListView::new()
            .title("FlexibleRow Variations")
            .scroll_state(self.scroll.clone())
            .section(basic_patterns())
            .section(self.toggle_controls())
            .section(self.sort_options())
            .section(self.navigation_patterns())
            .section(mixed_controls())
            .section(complex_layouts())
            .section(center_only());

        Stack::vertical().spacing(0).child(list).child(
            Text::new(" tab focus  enter toggle  ↑↓ scroll  q quit")
                .font(Font::Caption)
                .secondary(),
        )
    }

    fn toggle_controls(&self) -> Section {
        let notifications = self.has_notifications.clone();
        let dark_mode = self.is_dark_mode.clone();

        Section::new("Toggle Controls")
            .row(FlexibleRow::titled("Notifications", move || {
                ControlToggle::new(notifications.binding())
            }))
            .row(FlexibleRow::titled("Dark Mode", move || {
                ControlToggle::with_label(Some("Dark Mode".to_string()), dark_mode.binding())
            }))
    }

    fn sort_options(&self) -> Section {
        ["Name", "Date", "Size"]
            .into_iter()
            .enumerate()
            .fold(Section::new("Sort Options"), |section, (index, title)| {
                let order = self.sort_order.clone();
                section.row(FlexibleRow::titled(title, move || {
                    let order = order.clone();
                    ControlRadio::new(order.get() == index, move || order.set(index))
                }))
            })
    }

    fn navigation_patterns(&self) -> Section {
        let favourite = self.is_favourite.clone();

        Section::new("Navigation Patterns")
            .row(FlexibleRow::new(
                || ControlButton::image("chevron.left", || tracing::info!("back")),
                || Text::new("Chapter 5").font(Font::Headline),
                || ControlButton::image("chevron.right", || tracing::info!("forward")),
            ))
            .row(FlexibleRow::new(
                move || {
                    let favourite = favourite.clone();
                    ControlRadio::new(favourite.get(), move || favourite.toggle())
                        .selected_image("heart.fill")
                        .unselected_image("heart")
                        .selected_color(Color::red())
                        .unselected_color(Color::red())
                },
                || Text::new("Favourite Item"),
                || ControlButton::image("square.and.arrow.up", || tracing::info!("share")),
            ))
    }
}

fn basic_patterns() -> Section {
    Section::new("Basic Patterns")
        .row(FlexibleRow::titled("Simple Actions", || {
            ControlButton::title("Edit", || tracing::info!("edit tapped"))
        }))
        .row(FlexibleRow::titled("Delete Item", || {
            ControlButton::image("trash", || tracing::info!("delete tapped"))
        }))
        .row(FlexibleRow::titled("Save Changes", || {
            ControlButton::labeled("Save", "checkmark", || tracing::info!("save tapped"))
        }))
}

fn mixed_controls() -> Section {
    Section::new("Mixed Controls")
        .row(FlexibleRow::new(
            || ControlRadio::new(true, || tracing::info!("theme selected")),
            || Text::new("Light Theme"),
            || ControlToggle::new(Binding::constant(true)),
        ))
        .row(FlexibleRow::new(
            || Image::system("star.fill").foreground(Color::yellow()),
            || {
                Stack::vertical()
                    .spacing(0)
                    .child(Text::new("Premium Feature").font(Font::Headline))
                    .child(Text::new("Unlock all features").font(Font::Caption).secondary())
            },
            || ControlButton::title("Upgrade", || tracing::info!("upgrade tapped")),
        ))
}

fn complex_layouts() -> Section {
    Section::new("Complex Layouts")
        .row(FlexibleRow::new(
            || Image::system("person.circle.fill").foreground(Color::blue()),
            || {
                Stack::vertical()
                    .spacing(0)
                    .child(Text::new("John Doe").font(Font::Headline))
                    .child(Text::new("john.doe@example.com").font(Font::Subheadline).secondary())
                    .child(Text::new("Premium Member").font(Font::Caption).foreground(Color::blue()))
            },
            || {
                Stack::vertical()
                    .spacing(1)
                    .child(ControlButton::image("pencil", || tracing::info!("edit profile")))
                    .child(ControlButton::image("gearshape", || tracing::info!("settings")))
            },
        ))
        .row(FlexibleRow::titled("Manage Item", || {
            Stack::horizontal()
                .spacing(2)
                .child(ControlButton::image("pencil", || tracing::info!("edit")))
                .child(ControlButton::image("doc.on.doc", || tracing::info!("duplicate")))
                .child(ControlButton::image("trash", || tracing::info!("delete")))
        }))
}

fn center_only() -> Section {
    Section::new("Center Only").row(FlexibleRow::center_only(|| {
        Text::new("No controls, Just Content")
            .font(Font::Subheadline)
            .secondary()
    }))
}

/// Log to a daily file when a log directory is configured
///
/// The returned guard flushes the writer when dropped, so it must live until
/// the app exits.
fn init_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(dir) = config.log_dir() else {
        return Ok(None);
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(dir, "flexrow-gallery.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).context("invalid FLEXROW_LOG filter")?)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(Some(guard))
}

fn main() -> Result<()> {
    let config = Config::parse();
    let _guard = init_logging(&config)?;

    let gallery = Gallery::new();
    let mut app = App::new(config)?;
    app.run(|| gallery.build())?;

    tracing::info!(
        notifications = gallery.has_notifications.get(),
        dark_mode = gallery.is_dark_mode.get(),
        sort_order = gallery.sort_order.get(),
        favourite = gallery.is_favourite.get(),
        "gallery closed"
    );
    Ok(())
}
