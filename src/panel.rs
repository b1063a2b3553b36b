use crate::scene::Sphere;

/// What the panel asked the driver to do this frame
#[derive(Debug, Default, Clone, Copy)]
pub struct PanelResponse {
    pub toggle_clicked: bool,
}

/// Draw the debug panel: radius slider, toggle button, and one collapsing
/// section per line with elevation and scale sliders
///
/// Edits are plain field writes into the sphere; the placer picks them up on
/// the next frame.
pub fn show(ctx: &egui::Context, sphere: &mut Sphere) -> PanelResponse {
    let mut response = PanelResponse::default();

    egui::Window::new("sphere")
        .default_pos(egui::pos2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            let mut radius = sphere.radius();
            if ui
                .add(
                    egui::Slider::new(&mut radius, 1.0..=10.0)
                        .step_by(0.1)
                        .text("radius"),
                )
                .changed()
            {
                sphere.set_radius(radius);
            }

            if ui.button("toggle radius").clicked() {
                response.toggle_clicked = true;
            }

            ui.separator();

            for (i, line) in sphere.lines_mut().iter_mut().enumerate() {
                egui::CollapsingHeader::new(format!("line-{i}"))
                    .default_open(false)
                    .show(ui, |ui| {
                        ui.label(format!("{} cubes", line.cube_count()));
                        ui.add(
                            egui::Slider::new(&mut line.elevation, -1.0..=1.0)
                                .step_by(0.01)
                                .text("elevation"),
                        );
                        ui.add(
                            egui::Slider::new(&mut line.scale, 0.1..=5.0)
                                .step_by(0.01)
                                .text("scale"),
                        );
                    });
            }
        });

    response
}
