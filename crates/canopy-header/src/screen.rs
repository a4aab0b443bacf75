//! # Collapsing header screen
//!
//! `CollapsingHeader` is the state of one detail screen instance. The host
//! feeds it the events its layout and input layers produce, and asks it for a
//! [`HeaderFrame`] whenever it is about to draw:
//!
//! ```rust
//! use canopy_core::{FrameScheduler, LayoutContext, Scope};
//! use canopy_header::{CollapsingHeader, HeaderCallbacks, HeaderConfig, ToolbarState};
//! use web_time::Instant;
//!
//! let scope = Scope::new();
//! let scheduler = FrameScheduler::new();
//! let mut header = CollapsingHeader::mount(
//!     &scope,
//!     scheduler.clone(),
//!     HeaderConfig::default(),
//!     LayoutContext::default(),
//!     HeaderCallbacks::default(),
//! )
//! .expect("default config is valid");
//!
//! header.on_title_layout(500.0);
//! header.on_scroll(651.0);
//! let frame = header.frame(Instant::now());
//! assert_eq!(frame.toolbar_state, ToolbarState::Shown);
//!
//! scope.dispose();
//! assert!(scheduler.is_empty());
//! ```
//!
//! The toolbar state is re-resolved on every frame; a change retargets the
//! crossfade, whose sampling runs as a task on the shared `FrameScheduler`.
//! Disposing the mount scope (or dropping the header) cancels that task and
//! the snackbar timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bitflags::bitflags;
use canopy_core::{
    Dp, FrameResult, FrameScheduler, LayoutContext, PaddingValues, Scope, Size, TaskHandle,
};
use web_time::Instant;

use crate::config::{HeaderConfig, validate_density};
use crate::error::ConfigError;
use crate::hide::{MeasuredPlaceholder, Placeholder};
use crate::insets::{Sides, SystemBarInsets};
use crate::parallax::{FabInputs, FabPlacement, parallax_offset, place_fab};
use crate::scroller::{LayoutReferenceCapture, ReferencePosition, ScrollTracker};
use crate::snackbar::SnackbarTimer;
use crate::toolbar::{ToolbarState, resolve};
use crate::transition::{TransitionAlphas, TransitionAnimator};

bitflags! {
    /// Inputs that changed since the previous frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Dirty: u8 {
        const SCROLL    = 1 << 0;
        const REFERENCE = 1 << 1;
        const IMAGE     = 1 << 2;
        const ADDED     = 1 << 3;
        const INSETS    = 1 << 4;
    }
}

/// Click handlers passed through to whatever the host renders.
#[derive(Clone)]
pub struct HeaderCallbacks {
    pub on_fab_click: Rc<dyn Fn()>,
    pub on_back_click: Rc<dyn Fn()>,
    pub on_share_click: Rc<dyn Fn()>,
    pub on_dismiss_snackbar: Rc<dyn Fn()>,
}

impl Default for HeaderCallbacks {
    fn default() -> Self {
        Self {
            on_fab_click: Rc::new(|| {}),
            on_back_click: Rc::new(|| {}),
            on_share_click: Rc::new(|| {}),
            on_dismiss_snackbar: Rc::new(|| {}),
        }
    }
}

impl HeaderCallbacks {
    pub fn new(
        on_fab_click: impl Fn() + 'static,
        on_back_click: impl Fn() + 'static,
        on_share_click: impl Fn() + 'static,
    ) -> Self {
        Self {
            on_fab_click: Rc::new(on_fab_click),
            on_back_click: Rc::new(on_back_click),
            on_share_click: Rc::new(on_share_click),
            ..Self::default()
        }
    }

    pub fn on_dismiss_snackbar(mut self, f: impl Fn() + 'static) -> Self {
        self.on_dismiss_snackbar = Rc::new(f);
        self
    }
}

/// Hero image layer, present while the bar is hidden.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageHeader {
    /// Parallax padding above the image.
    pub top_padding: Dp,
    pub height: Dp,
    pub alpha: f32,
    pub fab: Option<FabPlacement>,
}

/// The chrome drawn on top of the content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderVariant {
    /// Compact bar with back, title and share.
    Bar { alpha: f32, padding: PaddingValues },
    /// Round back and share buttons floating over the image.
    Actions { alpha: f32, padding: PaddingValues },
}

impl HeaderVariant {
    pub fn alpha(&self) -> f32 {
        match *self {
            HeaderVariant::Bar { alpha, .. } | HeaderVariant::Actions { alpha, .. } => alpha,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderFrame {
    pub toolbar_state: ToolbarState,
    pub alphas: TransitionAlphas,
    pub animating: bool,
    pub scroll_offset: f32,
    pub parallax_px: f32,
    pub parallax: Dp,
    pub image: Placeholder<ImageHeader>,
    pub title: Placeholder<()>,
    pub variant: HeaderVariant,
    pub snackbar_visible: bool,
}

impl HeaderFrame {
    pub fn fab(&self) -> Option<FabPlacement> {
        self.image.content().and_then(|image| image.fab)
    }
}

struct Lifecycle {
    scheduler: FrameScheduler,
    animation: RefCell<Option<TaskHandle>>,
    mounted: Cell<bool>,
}

impl Lifecycle {
    fn teardown(&self) {
        if !self.mounted.replace(false) {
            return;
        }
        if let Some(task) = self.animation.borrow_mut().take() {
            task.cancel();
        }
        log::debug!("header: unmounted");
    }
}

pub struct CollapsingHeader {
    config: HeaderConfig,
    ctx: LayoutContext,
    callbacks: HeaderCallbacks,
    scroller: ScrollTracker,
    reference: LayoutReferenceCapture,
    image_height: Option<f32>,
    image_slot: MeasuredPlaceholder,
    title_slot: MeasuredPlaceholder,
    is_added: bool,
    insets: SystemBarInsets,
    animator: Rc<RefCell<TransitionAnimator>>,
    last_state: ToolbarState,
    snackbar: Rc<SnackbarTimer>,
    lifecycle: Rc<Lifecycle>,
    dirty: Rc<Cell<Dirty>>,
}

impl CollapsingHeader {
    /// Creates the state for one screen instance, torn down when `scope` is
    /// disposed.
    pub fn mount(
        scope: &Scope,
        scheduler: FrameScheduler,
        config: HeaderConfig,
        ctx: LayoutContext,
        callbacks: HeaderCallbacks,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_density(ctx.density)?;

        let lifecycle = Rc::new(Lifecycle {
            scheduler: scheduler.clone(),
            animation: RefCell::new(None),
            mounted: Cell::new(true),
        });
        let snackbar = Rc::new(SnackbarTimer::new(
            scheduler,
            config.snackbar_duration,
            callbacks.on_dismiss_snackbar.clone(),
        ));

        {
            let lifecycle = Rc::downgrade(&lifecycle);
            let snackbar = Rc::downgrade(&snackbar);
            scope.add_disposer(move || {
                if let Some(s) = snackbar.upgrade() {
                    s.cancel();
                }
                if let Some(l) = lifecycle.upgrade() {
                    l.teardown();
                }
            });
        }

        let dirty = Rc::new(Cell::new(Dirty::empty()));
        let scroller = ScrollTracker::new();
        {
            let dirty = dirty.clone();
            scroller.subscribe(move |_| dirty.set(dirty.get() | Dirty::SCROLL));
        }

        log::debug!(
            "header: mounted (threshold={}px, parallax=1/{}, density={})",
            config.threshold_offset,
            config.parallax_factor,
            ctx.density.scale
        );

        Ok(Self {
            animator: Rc::new(RefCell::new(TransitionAnimator::new(
                ToolbarState::Hidden,
                config.transition,
            ))),
            config,
            ctx,
            callbacks,
            scroller,
            reference: LayoutReferenceCapture::new(),
            image_height: None,
            image_slot: MeasuredPlaceholder::new(),
            title_slot: MeasuredPlaceholder::new(),
            is_added: false,
            insets: SystemBarInsets::default(),
            last_state: ToolbarState::Hidden,
            snackbar,
            lifecycle,
            dirty,
        })
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn scroller(&self) -> &ScrollTracker {
        &self.scroller
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.mounted.get()
    }

    pub fn on_scroll(&self, offset: f32) -> bool {
        self.scroller.set_offset(offset)
    }

    pub fn scroll_by(&self, dy: f32) -> f32 {
        self.scroller.scroll_by(dy)
    }

    pub fn set_scroll_extents(&self, viewport_height: f32, content_height: f32) {
        self.scroller.set_extents(viewport_height, content_height);
    }

    /// Title layout callback. Only the first position is kept.
    pub fn on_title_layout(&mut self, y: f32) {
        if self.reference.on_first_layout(y) {
            self.mark(Dirty::REFERENCE);
        }
    }

    pub fn reference_position(&self) -> ReferencePosition {
        self.reference.position()
    }

    pub fn on_title_measured(&mut self, size: Size) {
        self.title_slot.on_measured(size);
    }

    /// Image layout callback, in px.
    pub fn on_image_measured(&mut self, height: f32) {
        if !height.is_finite() {
            log::warn!("header: ignoring non-finite image height {height}");
            return;
        }
        if self.image_height != Some(height) {
            self.image_height = Some(height);
            self.mark(Dirty::IMAGE);
        }
    }

    /// Layout callback for the whole image header block.
    pub fn on_header_measured(&mut self, size: Size) {
        self.image_slot.on_measured(size);
    }

    pub fn image_height(&self) -> Option<f32> {
        self.image_height
    }

    pub fn set_added(&mut self, is_added: bool) {
        if self.is_added != is_added {
            self.is_added = is_added;
            self.mark(Dirty::ADDED);
        }
    }

    pub fn set_insets(&mut self, insets: SystemBarInsets) {
        if self.insets != insets {
            self.insets = insets;
            self.mark(Dirty::INSETS);
        }
    }

    pub fn toolbar_state(&self) -> ToolbarState {
        resolve(
            self.scroller.offset(),
            self.reference.position(),
            self.config.threshold_offset,
        )
    }

    pub fn alphas(&self) -> TransitionAlphas {
        self.animator.borrow().alphas()
    }

    pub fn click_fab(&self) {
        (self.callbacks.on_fab_click)();
    }

    pub fn click_back(&self) {
        (self.callbacks.on_back_click)();
    }

    pub fn click_share(&self) {
        (self.callbacks.on_share_click)();
    }

    pub fn show_snackbar(&self, now: Instant) {
        if self.is_mounted() {
            self.snackbar.show(now);
        }
    }

    pub fn dismiss_snackbar(&self) {
        self.snackbar.dismiss();
    }

    pub fn snackbar_visible(&self) -> bool {
        self.snackbar.is_showing()
    }

    fn mark(&self, flag: Dirty) {
        self.dirty.set(self.dirty.get() | flag);
    }

    fn start_transition(&mut self, state: ToolbarState, now: Instant) {
        log::debug!("header: toolbar {} -> {}", self.last_state, state);
        self.last_state = state;

        // Nothing samples an unmounted screen, so it settles at once.
        if !self.lifecycle.mounted.get() {
            self.animator.borrow_mut().snap_to_state(state);
            return;
        }
        self.animator.borrow_mut().set_state(state, now);
        let running = self
            .lifecycle
            .animation
            .borrow()
            .as_ref()
            .is_some_and(TaskHandle::is_active);
        if !running {
            let animator = self.animator.clone();
            let task = self.lifecycle.scheduler.on_frame(move |now| {
                if animator.borrow_mut().tick(now) {
                    FrameResult::Continue
                } else {
                    FrameResult::Finished
                }
            });
            *self.lifecycle.animation.borrow_mut() = Some(task);
        }
    }

    /// Snapshot of everything the host draws this frame.
    pub fn frame(&mut self, now: Instant) -> HeaderFrame {
        let dirty = self.dirty.replace(Dirty::empty());
        if !dirty.is_empty() {
            log::trace!("header: frame after {dirty:?}");
        }

        let state = self.toolbar_state();
        if state != self.last_state {
            self.start_transition(state, now);
        }

        let (alphas, animating) = {
            let animator = self.animator.borrow();
            (
                animator.alphas(),
                animator.is_animating() && self.lifecycle.mounted.get(),
            )
        };
        let density = self.ctx.density;
        let scroll_offset = self.scroller.offset();
        let parallax_px = parallax_offset(scroll_offset, self.config.parallax_factor);
        let parallax = density.px_to_dp(parallax_px);
        let hidden = state == ToolbarState::Shown;

        let fab = place_fab(
            FabInputs {
                image_height_px: self.image_height,
                parallax,
                diameter: self.config.fab_diameter,
                end_padding: self.config.fab_end_padding,
                is_added: self.is_added,
                toolbar_state: state,
                alpha: alphas.header,
            },
            density,
        );
        let header_height = self.config.header_height;
        let image = self.image_slot.render(hidden, || ImageHeader {
            top_padding: parallax,
            height: header_height,
            alpha: alphas.header,
            fab,
        });
        let title = self.title_slot.render(hidden, || ());

        let variant = match state {
            ToolbarState::Shown => HeaderVariant::Bar {
                alpha: alphas.bar,
                padding: self
                    .insets
                    .padding(Sides::LEFT | Sides::TOP | Sides::RIGHT, density),
            },
            ToolbarState::Hidden => HeaderVariant::Actions {
                alpha: alphas.header,
                padding: self.insets.padding(Sides::all(), density).plus(PaddingValues {
                    top: self.config.toolbar_icon_padding.0,
                    ..PaddingValues::default()
                }),
            },
        };

        HeaderFrame {
            toolbar_state: state,
            alphas,
            animating,
            scroll_offset,
            parallax_px,
            parallax,
            image,
            title,
            variant,
            snackbar_visible: self.snackbar.is_showing(),
        }
    }
}

impl Drop for CollapsingHeader {
    fn drop(&mut self) {
        self.snackbar.cancel();
        self.lifecycle.teardown();
    }
}
