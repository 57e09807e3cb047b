use crate::core::visualizers::riemann::sampling_rule::SamplingRule;
use crate::core::visualizers::taylor::function_family::FunctionFamily;
use crate::core::visualizers::visualizer_kinds::VisualizerKinds;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum WeierstrassControl {
    SetA(f64),
    SetB(u32),
    SetZoom(f64),
    /// Multiplies the zoom, e.g. one mouse-wheel notch.
    ZoomBy(f64),
    ResetView,
    /// Pointer positions are surface pixels.
    PointerPressed { x: f64 },
    PointerMoved { x: f64 },
    PointerReleased,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EpsilonDeltaControl {
    SetC(f64),
    SetEpsilon(f64),
    SetDelta(f64),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RiemannControl {
    SetSubdivisions(u32),
    SetRule(SamplingRule),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TaylorControl {
    SetDegree(u32),
    SetCenter(f64),
    SetFamily(FunctionFamily),
}

/// One input from the UI layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlEvent {
    Select(VisualizerKinds),
    Weierstrass(WeierstrassControl),
    EpsilonDelta(EpsilonDeltaControl),
    Riemann(RiemannControl),
    Taylor(TaylorControl),
}

impl ControlEvent {
    /// Visualizer whose parameters the event changes.
    #[must_use]
    pub fn target(&self) -> VisualizerKinds {
        match self {
            Self::Select(kind) => *kind,
            Self::Weierstrass(_) => VisualizerKinds::Weierstrass,
            Self::EpsilonDelta(_) => VisualizerKinds::EpsilonDelta,
            Self::Riemann(_) => VisualizerKinds::Riemann,
            Self::Taylor(_) => VisualizerKinds::Taylor,
        }
    }
}

impl From<WeierstrassControl> for ControlEvent {
    fn from(control: WeierstrassControl) -> Self {
        Self::Weierstrass(control)
    }
}

impl From<EpsilonDeltaControl> for ControlEvent {
    fn from(control: EpsilonDeltaControl) -> Self {
        Self::EpsilonDelta(control)
    }
}

impl From<RiemannControl> for ControlEvent {
    fn from(control: RiemannControl) -> Self {
        Self::Riemann(control)
    }
}

impl From<TaylorControl> for ControlEvent {
    fn from(control: TaylorControl) -> Self {
        Self::Taylor(control)
    }
}
