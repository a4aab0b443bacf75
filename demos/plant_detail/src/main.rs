//! Headless plant detail screen.
//!
//! Lays out the detail column with taffy, scrolls it down past the title and
//! back up on a manual clock, and logs what the header would draw each frame.
//! Run with `RUST_LOG=debug` to also see the header's own transitions.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use canopy_core::{
    Clock, Density, Dp, FrameScheduler, LayoutContext, ManualClock, Scope, Size, SystemClock,
};
use canopy_header::{
    CollapsingHeader, HeaderCallbacks, HeaderConfig, HeaderFrame, HeaderVariant, Placeholder,
    SystemBarInsets,
};
use taffy::prelude::*;
use taffy::style::Display;
use web_time::Duration;

const VIEWPORT: (f32, f32) = (411.0, 800.0);
const TITLE_HEIGHT: Dp = Dp(32.0);
const BODY_HEIGHT: Dp = Dp(1600.0);
const FRAME: Duration = Duration::from_millis(16);

struct DetailLayout {
    tree: TaffyTree<()>,
    root: NodeId,
    header: NodeId,
    image: NodeId,
    title: NodeId,
    // Styles of the real content, put back when a slot is shown again.
    header_style: Style,
    image_style: Style,
    title_style: Style,
    density: Density,
}

/// Fixed-size box standing in for a hidden slot.
fn spacer_style(size: Size) -> Style {
    Style {
        size: taffy::prelude::Size {
            width: length(size.width),
            height: length(size.height),
        },
        ..Default::default()
    }
}

impl DetailLayout {
    fn new(density: Density, image_height: Dp) -> Result<Self> {
        let px = |dp: Dp| dp.to_px(density);
        let mut tree: TaffyTree<()> = TaffyTree::new();

        let image_style = Style {
            size: taffy::prelude::Size {
                width: percent(1.0),
                height: length(px(image_height)),
            },
            ..Default::default()
        };
        let header_style = Style {
            flex_direction: FlexDirection::Column,
            ..Default::default()
        };
        let title_style = Style {
            size: taffy::prelude::Size {
                width: auto(),
                height: length(px(TITLE_HEIGHT)),
            },
            ..Default::default()
        };
        let image = tree.new_leaf(image_style.clone())?;
        let header = tree.new_with_children(header_style.clone(), &[image])?;
        let title = tree.new_leaf(title_style.clone())?;
        let body = tree.new_leaf(Style {
            size: taffy::prelude::Size {
                width: percent(1.0),
                height: length(px(BODY_HEIGHT)),
            },
            ..Default::default()
        })?;
        let root = tree.new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: taffy::prelude::Size {
                    width: length(VIEWPORT.0 * density.scale),
                    height: auto(),
                },
                ..Default::default()
            },
            &[header, title, body],
        )?;

        Ok(Self {
            tree,
            root,
            header,
            image,
            title,
            header_style,
            image_style,
            title_style,
            density,
        })
    }

    /// Applies what the last frame asked for (parallax padding, spacers for
    /// hidden slots), lays the column out and reports the results back, as a
    /// layout pass would.
    fn layout(&mut self, screen: &mut CollapsingHeader, frame: &HeaderFrame) -> Result<()> {
        match frame.image {
            Placeholder::Content(_) => {
                let mut header = self.header_style.clone();
                header.padding.top = length(frame.parallax.to_px(self.density));
                self.tree.set_style(self.header, header)?;
                self.tree.set_style(self.image, self.image_style.clone())?;
            }
            Placeholder::Spacer(size) => {
                self.tree.set_style(self.header, spacer_style(size))?;
                self.tree.set_style(
                    self.image,
                    Style {
                        display: Display::None,
                        ..Default::default()
                    },
                )?;
            }
        }
        let title = match frame.title {
            Placeholder::Content(()) => self.title_style.clone(),
            Placeholder::Spacer(size) => spacer_style(size),
        };
        self.tree.set_style(self.title, title)?;

        self.tree.compute_layout(
            self.root,
            taffy::prelude::Size {
                width: AvailableSpace::Definite(VIEWPORT.0 * self.density.scale),
                height: AvailableSpace::MaxContent,
            },
        )?;

        let root = *self.tree.layout(self.root)?;
        let header = *self.tree.layout(self.header)?;
        let image = *self.tree.layout(self.image)?;
        let title = *self.tree.layout(self.title)?;

        let scroll = screen.scroller().offset();
        screen.set_scroll_extents(VIEWPORT.1 * self.density.scale, root.size.height);
        // Spacers are not content; only shown slots report their size.
        if frame.image.is_content() {
            screen.on_header_measured(Size::new(header.size.width, header.size.height));
            screen.on_image_measured(image.size.height);
        }
        if frame.title.is_content() {
            screen.on_title_measured(Size::new(title.size.width, title.size.height));
        }
        screen.on_title_layout(title.location.y - scroll);
        Ok(())
    }
}

fn density_from_env() -> Result<Density> {
    match std::env::var("CANOPY_DENSITY") {
        Ok(raw) => {
            let scale: f32 = raw
                .parse()
                .with_context(|| format!("CANOPY_DENSITY must be a number, got {raw:?}"))?;
            Ok(Density { scale })
        }
        Err(_) => Ok(Density { scale: 2.0 }),
    }
}

fn describe(frame: &HeaderFrame) -> String {
    let chrome = match frame.variant {
        HeaderVariant::Bar { alpha, .. } => format!("bar a={alpha:.2}"),
        HeaderVariant::Actions { alpha, .. } => format!("actions a={alpha:.2}"),
    };
    let fab = frame
        .fab()
        .map(|f| format!("fab@{:.1}dp", f.top.0))
        .unwrap_or_else(|| "no fab".to_string());
    format!(
        "scroll={:>6.1}px parallax={:>5.1}dp {} image={:.2} {} {}{}",
        frame.scroll_offset,
        frame.parallax.0,
        frame.toolbar_state,
        frame.alphas.header,
        chrome,
        fab,
        if frame.snackbar_visible { " [snackbar]" } else { "" },
    )
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Starting plant detail demo");

    let density = density_from_env()?;
    let config = HeaderConfig::default();
    // Frames are stepped by hand so the run does not depend on wall time.
    let clock = ManualClock::new(SystemClock.now());
    let scheduler = FrameScheduler::new();
    let scope = Scope::new();

    let added = Rc::new(Cell::new(false));
    let callbacks = HeaderCallbacks::new(
        {
            let added = added.clone();
            move || added.set(true)
        },
        || log::info!("back pressed"),
        || log::info!("share pressed"),
    )
    .on_dismiss_snackbar(|| log::info!("snackbar dismissed"));

    let mut screen = CollapsingHeader::mount(
        &scope,
        scheduler.clone(),
        config,
        LayoutContext::new(density),
        callbacks,
    )
    .context("mounting the collapsing header")?;
    screen.set_insets(SystemBarInsets {
        left: 0.0,
        top: 24.0 * density.scale,
        right: 0.0,
        bottom: 48.0 * density.scale,
    });

    let mut layout = DetailLayout::new(density, config.header_height)?;

    // Initial measurement pass before anything is drawn.
    let first = screen.frame(clock.now());
    layout.layout(&mut screen, &first)?;

    let speed = 24.0 * density.scale;
    let mut velocity = speed;
    for n in 0..240 {
        let now = clock.advance(FRAME);

        if n == 10 {
            screen.click_fab();
            screen.set_added(added.get());
            screen.show_snackbar(now);
        }
        if screen.scroll_by(velocity) != 0.0 {
            velocity = -speed;
        }

        let frame = screen.frame(now);
        layout.layout(&mut screen, &frame)?;
        scheduler.tick(now);

        if n % 8 == 0 || frame.animating {
            log::info!("frame {n:>3}: {}", describe(&frame));
        }
        if velocity < 0.0 && frame.scroll_offset == 0.0 {
            break;
        }
    }

    scope.dispose();
    log::info!("unmounted; {} scheduled task(s) left", scheduler.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_header_lays_out_as_spacer() -> Result<()> {
        let density = Density::default();
        let scope = Scope::new();
        let mut screen = CollapsingHeader::mount(
            &scope,
            FrameScheduler::new(),
            HeaderConfig::default(),
            LayoutContext::new(density),
            HeaderCallbacks::default(),
        )?;
        let mut layout = DetailLayout::new(density, Dp(278.0))?;
        let clock = ManualClock::default();

        let first = screen.frame(clock.now());
        layout.layout(&mut screen, &first)?;
        assert_eq!(screen.image_height(), Some(278.0));

        // Past the title (first laid out at y=278) plus the threshold.
        screen.on_scroll(500.0);
        let collapsed = screen.frame(clock.advance(FRAME));
        assert_eq!(
            collapsed.image,
            Placeholder::Spacer(Size::new(VIEWPORT.0, 278.0))
        );
        layout.layout(&mut screen, &collapsed)?;

        let header = *layout.tree.layout(layout.header)?;
        let image = *layout.tree.layout(layout.image)?;
        assert_eq!((header.size.width, header.size.height), (VIEWPORT.0, 278.0));
        assert_eq!(image.size.height, 0.0);
        assert_eq!(screen.image_height(), Some(278.0));

        screen.on_scroll(0.0);
        let expanded = screen.frame(clock.advance(FRAME));
        assert!(expanded.image.is_content());
        layout.layout(&mut screen, &expanded)?;
        let image = *layout.tree.layout(layout.image)?;
        assert_eq!(image.size.height, 278.0);
        Ok(())
    }
}
