use std::convert::Infallible;

use crate::controllers::interactive::control_event::{
    ControlEvent, EpsilonDeltaControl, RiemannControl, TaylorControl, WeierstrassControl,
};
use crate::controllers::interactive::errors::ControlError;
use crate::core::drawing::ports::surface::DrawSurface;
use crate::core::visualizers::epsilon_delta::containment::ContainmentStatus;
use crate::core::visualizers::epsilon_delta::params::EpsilonDeltaParams;
use crate::core::visualizers::epsilon_delta::visualizer::{
    EpsilonDeltaReadout, EpsilonDeltaVisualizer,
};
use crate::core::visualizers::errors::RenderError;
use crate::core::visualizers::ports::visualizer::Visualizer;
use crate::core::visualizers::riemann::params::RiemannParams;
use crate::core::visualizers::riemann::visualizer::{RiemannReadout, RiemannVisualizer};
use crate::core::visualizers::taylor::params::TaylorParams;
use crate::core::visualizers::taylor::visualizer::{TaylorReadout, TaylorVisualizer};
use crate::core::visualizers::visualizer_kinds::VisualizerKinds;
use crate::core::visualizers::weierstrass::params::WeierstrassParams;
use crate::core::visualizers::weierstrass::visualizer::{
    WeierstrassReadout, WeierstrassVisualizer,
};

/// Latest readout of each visualizer, `None` until it has rendered once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readouts {
    pub weierstrass: Option<WeierstrassReadout>,
    pub epsilon_delta: Option<EpsilonDeltaReadout>,
    pub riemann: Option<RiemannReadout>,
    pub taylor: Option<TaylorReadout>,
}

impl Readouts {
    #[must_use]
    pub fn text(&self, kind: VisualizerKinds) -> Option<String> {
        match kind {
            VisualizerKinds::Weierstrass => self.weierstrass.map(|r| r.to_string()),
            VisualizerKinds::EpsilonDelta => self.epsilon_delta.map(|r| r.to_string()),
            VisualizerKinds::Riemann => self.riemann.map(|r| r.to_string()),
            VisualizerKinds::Taylor => self.taylor.map(|r| r.to_string()),
        }
    }
}

/// One instance of every visualizer, each drawing on its own surface.
#[derive(Debug)]
pub struct VisualizerSession<S: DrawSurface> {
    selected: VisualizerKinds,
    weierstrass: WeierstrassVisualizer<S>,
    epsilon_delta: EpsilonDeltaVisualizer<S>,
    riemann: RiemannVisualizer<S>,
    taylor: TaylorVisualizer<S>,
    readouts: Readouts,
}

impl<S: DrawSurface> VisualizerSession<S> {
    /// Builds the session with default parameters. Nothing is drawn until `render_all`.
    pub fn new<F>(mut surface_for: F) -> Self
    where
        F: FnMut(VisualizerKinds) -> S,
    {
        match Self::try_new(|kind| Ok::<S, Infallible>(surface_for(kind))) {
            Ok(session) => session,
            Err(never) => match never {},
        }
    }

    pub fn try_new<F, E>(mut surface_for: F) -> Result<Self, E>
    where
        F: FnMut(VisualizerKinds) -> Result<S, E>,
    {
        Ok(Self {
            selected: VisualizerKinds::default(),
            weierstrass: WeierstrassVisualizer::new(
                surface_for(VisualizerKinds::Weierstrass)?,
                WeierstrassParams::default(),
            ),
            epsilon_delta: EpsilonDeltaVisualizer::new(
                surface_for(VisualizerKinds::EpsilonDelta)?,
                EpsilonDeltaParams::default(),
            ),
            riemann: RiemannVisualizer::new(
                surface_for(VisualizerKinds::Riemann)?,
                RiemannParams::default(),
            ),
            taylor: TaylorVisualizer::new(
                surface_for(VisualizerKinds::Taylor)?,
                TaylorParams::default(),
            ),
            readouts: Readouts::default(),
        })
    }

    #[must_use]
    pub fn selected(&self) -> VisualizerKinds {
        self.selected
    }

    #[must_use]
    pub fn readouts(&self) -> &Readouts {
        &self.readouts
    }

    #[must_use]
    pub fn containment_status(&self) -> Option<ContainmentStatus> {
        self.readouts.epsilon_delta.map(|readout| readout.status)
    }

    #[must_use]
    pub fn weierstrass(&self) -> &WeierstrassVisualizer<S> {
        &self.weierstrass
    }

    #[must_use]
    pub fn epsilon_delta(&self) -> &EpsilonDeltaVisualizer<S> {
        &self.epsilon_delta
    }

    #[must_use]
    pub fn riemann(&self) -> &RiemannVisualizer<S> {
        &self.riemann
    }

    #[must_use]
    pub fn taylor(&self) -> &TaylorVisualizer<S> {
        &self.taylor
    }

    #[must_use]
    pub fn surface(&self, kind: VisualizerKinds) -> &S {
        match kind {
            VisualizerKinds::Weierstrass => self.weierstrass.surface(),
            VisualizerKinds::EpsilonDelta => self.epsilon_delta.surface(),
            VisualizerKinds::Riemann => self.riemann.surface(),
            VisualizerKinds::Taylor => self.taylor.surface(),
        }
    }

    #[must_use]
    pub fn selected_surface(&self) -> &S {
        self.surface(self.selected)
    }

    /// Redraws `kind` from its current parameters and stores the readout.
    pub fn render(&mut self, kind: VisualizerKinds) -> Result<(), RenderError> {
        match kind {
            VisualizerKinds::Weierstrass => {
                self.readouts.weierstrass = Some(self.weierstrass.render()?);
            }
            VisualizerKinds::EpsilonDelta => {
                self.readouts.epsilon_delta = Some(self.epsilon_delta.render()?);
            }
            VisualizerKinds::Riemann => {
                self.readouts.riemann = Some(self.riemann.render()?);
            }
            VisualizerKinds::Taylor => {
                self.readouts.taylor = Some(self.taylor.render()?);
            }
        }

        Ok(())
    }

    pub fn render_all(&mut self) -> Result<(), RenderError> {
        for &kind in VisualizerKinds::ALL {
            self.render(kind)?;
        }

        Ok(())
    }

    /// Applies one control event and redraws the visualizer it touched.
    ///
    /// Returns whether a redraw happened. A rejected value leaves the parameters and
    /// the current drawing unchanged.
    pub fn handle(&mut self, event: ControlEvent) -> Result<bool, ControlError> {
        let changed = match event {
            ControlEvent::Select(kind) => return self.select(kind),
            ControlEvent::Weierstrass(control) => self.apply_weierstrass(control)?,
            ControlEvent::EpsilonDelta(control) => self.apply_epsilon_delta(control)?,
            ControlEvent::Riemann(control) => self.apply_riemann(control)?,
            ControlEvent::Taylor(control) => self.apply_taylor(control)?,
        };

        if changed {
            self.render(event.target())?;
        }

        Ok(changed)
    }

    fn select(&mut self, kind: VisualizerKinds) -> Result<bool, ControlError> {
        if kind != self.selected {
            // a drag in progress must not survive a switch away from its surface
            self.weierstrass.pointer_released();
            log::info!("selected {}", kind);
        }
        self.selected = kind;

        if self.readouts.text(kind).is_none() {
            self.render(kind)?;
            return Ok(true);
        }

        Ok(false)
    }

    fn apply_weierstrass(&mut self, control: WeierstrassControl) -> Result<bool, ControlError> {
        let visualizer = &mut self.weierstrass;

        let changed = match control {
            WeierstrassControl::SetA(a) => {
                visualizer.set_a(a)?;
                true
            }
            WeierstrassControl::SetB(b) => {
                visualizer.set_b(b)?;
                true
            }
            WeierstrassControl::SetZoom(zoom) => {
                visualizer.set_zoom(zoom);
                true
            }
            WeierstrassControl::ZoomBy(factor) => {
                let before = visualizer.params().zoom();
                visualizer.zoom_by(factor) != before
            }
            WeierstrassControl::ResetView => {
                visualizer.reset_view();
                true
            }
            WeierstrassControl::PointerPressed { x } => {
                visualizer.pointer_pressed(x);
                false
            }
            WeierstrassControl::PointerMoved { x } => visualizer.pointer_moved(x),
            WeierstrassControl::PointerReleased => {
                visualizer.pointer_released();
                false
            }
        };

        Ok(changed)
    }

    fn apply_epsilon_delta(&mut self, control: EpsilonDeltaControl) -> Result<bool, ControlError> {
        match control {
            EpsilonDeltaControl::SetC(c) => self.epsilon_delta.set_c(c)?,
            EpsilonDeltaControl::SetEpsilon(epsilon) => self.epsilon_delta.set_epsilon(epsilon)?,
            EpsilonDeltaControl::SetDelta(delta) => self.epsilon_delta.set_delta(delta)?,
        }

        Ok(true)
    }

    fn apply_riemann(&mut self, control: RiemannControl) -> Result<bool, ControlError> {
        match control {
            RiemannControl::SetSubdivisions(n) => self.riemann.set_subdivisions(n)?,
            RiemannControl::SetRule(rule) => self.riemann.set_rule(rule),
        }

        Ok(true)
    }

    fn apply_taylor(&mut self, control: TaylorControl) -> Result<bool, ControlError> {
        match control {
            TaylorControl::SetDegree(degree) => self.taylor.set_degree(degree)?,
            TaylorControl::SetCenter(center) => self.taylor.set_center(center)?,
            TaylorControl::SetFamily(family) => self.taylor.set_family(family),
        }

        Ok(true)
    }
}
