use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use motor_sim::io::json::motor_class;
use motor_sim::motor::config::MotorConfig;
use motor_sim::sim::motor::simulate;
use motor_sim::sim::state::{HistorySample, MotorState};

fn main() -> eframe::Result {
    let config = MotorConfig::default();
    let state = simulate(&config, 0.005, 30.0);

    let app = BurnViz { config, state };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Solid Motor Burn Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct BurnViz {
    config: MotorConfig,
    state: MotorState,
}

impl eframe::App for BurnViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.state.history.len() / 2000).max(1);
        let sampled: Vec<&HistorySample> = self.state.history.iter().step_by(step).collect();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!(
                "Motor: {} {}x {}",
                self.config.propellant.name,
                self.config.grain.segments,
                self.config.grain.shape.key()
            ));
            let duration = if self.state.burn_time > 0.0 {
                self.state.burn_time
            } else {
                self.state.time
            };
            let avg_thrust = if duration > 0.0 {
                self.state.total_impulse / duration
            } else {
                0.0
            };
            ui.label(format!(
                "Class {}{:.0}  |  Impulse: {:.0} N·s  |  Max thrust: {:.0} N  |  Peak Pc: {:.2} MPa  |  Burn: {:.2} s  |  {}",
                motor_class(self.state.total_impulse),
                avg_thrust,
                self.state.total_impulse,
                self.state.max_thrust,
                self.state.max_pressure / 1.0e6,
                duration,
                self.state.phase.label(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Chamber pressure vs Time
                ui.vertical(|ui| {
                    ui.label("Chamber Pressure (MPa)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.chamber_pressure / 1.0e6])
                        .collect();
                    Plot::new("pressure")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Pressure", points));
                        });
                });

                // Thrust vs Time
                ui.vertical(|ui| {
                    ui.label("Thrust (N)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.thrust])
                        .collect();
                    Plot::new("thrust")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Thrust", points));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Area ratio vs Time
                ui.vertical(|ui| {
                    ui.label("Kn (Ab/At)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.kn])
                        .collect();
                    Plot::new("kn")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Kn", points));
                        });
                });

                // Web regression vs Time
                ui.vertical(|ui| {
                    ui.label("Web Remaining (mm)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, self.config.grain.web_remaining(s.inner_radius) * 1000.0])
                        .collect();
                    Plot::new("web")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Web", points));
                        });
                });
            });
        });
    }
}
