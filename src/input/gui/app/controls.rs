//! egui widgets for the parameters of each visualizer.
//!
//! Widgets edit local copies of the current values and report edits as control
//! events; the session is only mutated after the egui pass ends.

use egui::{Color32, Ui};

use crate::controllers::interactive::{
    ControlEvent, EpsilonDeltaControl, RiemannControl, TaylorControl, VisualizerSession,
    WeierstrassControl,
};
use crate::core::drawing::ports::surface::DrawSurface;
use crate::core::visualizers::epsilon_delta::containment::ContainmentStatus;
use crate::core::visualizers::riemann::sampling_rule::SamplingRule;
use crate::core::visualizers::taylor::function_family::FunctionFamily;
use crate::core::visualizers::taylor::params::MAX_DEGREE;
use crate::core::visualizers::visualizer_kinds::VisualizerKinds;
use crate::core::visualizers::weierstrass::params::{MAX_ZOOM, MIN_ZOOM};

const STATUS_SUCCESS: Color32 = Color32::from_rgb(0, 128, 0);
const STATUS_FAIL: Color32 = Color32::from_rgb(204, 0, 0);

#[must_use]
pub fn status_colour(status: &ContainmentStatus) -> Color32 {
    match status.style_class() {
        "status-success" => STATUS_SUCCESS,
        _ => STATUS_FAIL,
    }
}

/// Draws the control panel for the selected visualizer and returns the edits made.
pub fn show_controls<S: DrawSurface>(ui: &mut Ui, session: &VisualizerSession<S>) -> Vec<ControlEvent> {
    let mut events = Vec::new();

    let mut selected = session.selected();
    egui::ComboBox::from_id_source("visualizer_kind")
        .selected_text(selected.display_name())
        .show_ui(ui, |ui| {
            for &kind in VisualizerKinds::ALL {
                ui.selectable_value(&mut selected, kind, kind.display_name());
            }
        });
    if selected != session.selected() {
        events.push(ControlEvent::Select(selected));
    }

    ui.separator();

    match session.selected() {
        VisualizerKinds::Weierstrass => weierstrass_controls(ui, session, &mut events),
        VisualizerKinds::EpsilonDelta => epsilon_delta_controls(ui, session, &mut events),
        VisualizerKinds::Riemann => riemann_controls(ui, session, &mut events),
        VisualizerKinds::Taylor => taylor_controls(ui, session, &mut events),
    }

    ui.separator();
    if let Some(text) = session.readouts().text(session.selected()) {
        ui.label(text);
    }

    events
}

fn weierstrass_controls<S: DrawSurface>(
    ui: &mut Ui,
    session: &VisualizerSession<S>,
    events: &mut Vec<ControlEvent>,
) {
    let params = *session.weierstrass().params();

    let mut a = params.a();
    if ui
        .add(egui::Slider::new(&mut a, 0.01..=0.99).text("a"))
        .changed()
    {
        events.push(WeierstrassControl::SetA(a).into());
    }

    let mut b = params.b();
    if ui.add(egui::Slider::new(&mut b, 1..=25).text("b")).changed() {
        events.push(WeierstrassControl::SetB(b).into());
    }

    let mut zoom = params.zoom();
    if ui
        .add(
            egui::Slider::new(&mut zoom, MIN_ZOOM..=MAX_ZOOM)
                .logarithmic(true)
                .suffix("x")
                .text("zoom"),
        )
        .changed()
    {
        events.push(WeierstrassControl::SetZoom(zoom).into());
    }

    if ui.button("Reset view").clicked() {
        events.push(WeierstrassControl::ResetView.into());
    }
    ui.label("Drag the plot to pan, scroll to zoom.");
}

fn epsilon_delta_controls<S: DrawSurface>(
    ui: &mut Ui,
    session: &VisualizerSession<S>,
    events: &mut Vec<ControlEvent>,
) {
    let params = *session.epsilon_delta().params();

    let mut c = params.c();
    if ui.add(egui::Slider::new(&mut c, -4.0..=4.0).text("c")).changed() {
        events.push(EpsilonDeltaControl::SetC(c).into());
    }

    let mut epsilon = params.epsilon();
    if ui
        .add(egui::Slider::new(&mut epsilon, 0.05..=2.0).text("epsilon"))
        .changed()
    {
        events.push(EpsilonDeltaControl::SetEpsilon(epsilon).into());
    }

    let mut delta = params.delta();
    if ui
        .add(egui::Slider::new(&mut delta, 0.01..=2.0).text("delta"))
        .changed()
    {
        events.push(EpsilonDeltaControl::SetDelta(delta).into());
    }

    if let Some(status) = session.containment_status() {
        ui.colored_label(status_colour(&status), status.message());
    }
}

fn riemann_controls<S: DrawSurface>(
    ui: &mut Ui,
    session: &VisualizerSession<S>,
    events: &mut Vec<ControlEvent>,
) {
    let params = *session.riemann().params();

    let mut n = params.subdivisions();
    if ui.add(egui::Slider::new(&mut n, 1..=100).text("n")).changed() {
        events.push(RiemannControl::SetSubdivisions(n).into());
    }

    let mut rule = params.rule();
    ui.horizontal(|ui| {
        for &option in SamplingRule::ALL {
            ui.radio_value(&mut rule, option, option.display_name());
        }
    });
    if rule != params.rule() {
        events.push(RiemannControl::SetRule(rule).into());
    }
}

fn taylor_controls<S: DrawSurface>(
    ui: &mut Ui,
    session: &VisualizerSession<S>,
    events: &mut Vec<ControlEvent>,
) {
    let params = *session.taylor().params();

    let mut family = params.family();
    egui::ComboBox::from_id_source("taylor_family")
        .selected_text(family.display_name())
        .show_ui(ui, |ui| {
            for &option in FunctionFamily::ALL {
                ui.selectable_value(&mut family, option, option.display_name());
            }
        });
    if family != params.family() {
        events.push(TaylorControl::SetFamily(family).into());
    }

    let mut degree = params.degree();
    if ui
        .add(egui::Slider::new(&mut degree, 0..=MAX_DEGREE.min(20)).text("degree"))
        .changed()
    {
        events.push(TaylorControl::SetDegree(degree).into());
    }

    let mut center = params.center();
    if ui
        .add(egui::Slider::new(&mut center, -5.0..=5.0).text("center"))
        .changed()
    {
        events.push(TaylorControl::SetCenter(center).into());
    }
}
