#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Десктопна графічна оболонка на eframe/egui.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use pulp_pressing_calculator::{
    calculator::{self, ProcessInputs, ProcessResults, DRY_MATTER_RANGE, SUGAR_CONTENT_RANGE},
    config, i18n, optimizer,
    process::{OperationMode, OptimizationEquation},
};

fn main() -> Result<(), eframe::Error> {
    // Опція мови: --lang xx або --lang=xx (xx: auto/uk/uk-ua/en/en-us)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(960.0, 680.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Pulp Pressing Calculator",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// Реєструє бінарний шрифт в egui під зазначеним іменем.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// Підхоплює системний шрифт з повним покриттям кирилиці.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
    ];
    for path in candidates {
        if let Ok(bytes) = fs::read(path) {
            apply_font_bytes(ctx, bytes, "system_cyrillic");
            return Ok(());
        }
    }
    Err("системний шрифт з кирилицею не знайдено, використовується вбудований".to_string())
}

/// Завантажує шрифт, вибраний користувачем у налаштуваннях.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let bytes = fs::read(path).map_err(|e| format!("{path}: {e}"))?;
    apply_font_bytes(ctx, bytes, "custom_font");
    Ok(())
}

/// Лінійне відображення значення з [min, max] у відрізок екрана [a, b].
fn chart_pos(value: f32, min: f32, max: f32, a: f32, b: f32) -> f32 {
    if (max - min).abs() < f32::EPSILON {
        return a;
    }
    a + (value - min) * (b - a) / (max - min)
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    // Розрахунок
    inputs: ProcessInputs,
    results: Option<ProcessResults>,
    // Налаштування
    show_settings_modal: bool,
    font_size: f32,
    ui_scale: f32,
    theme: ThemeChoice,
    custom_font_path: String,
    font_load_error: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculator,
    Curve,
    Comparison,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let inputs = ProcessInputs {
            selected_mode: config.default_mode,
            ..ProcessInputs::default()
        };
        Self {
            config,
            tr,
            lang_input,
            lang_save_status: None,
            tab: Tab::Calculator,
            inputs,
            results: None,
            show_settings_modal: false,
            font_size: 14.0,
            ui_scale: 1.0,
            theme: ThemeChoice::System,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    /// Бічне меню розділів.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Calculator, txt("gui.tab.calculator", "Calculator")),
            (Tab::Curve, txt("gui.tab.curve", "Optimization curve")),
            (Tab::Comparison, txt("gui.tab.comparison", "Mode comparison")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch section"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    /// Головний екран: вхідні параметри, режим, кнопка розрахунку,
    /// результати.
    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.calc.inputs_heading", "Process parameters"));
        ui.add_space(6.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("inputs_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    let fields: [(&str, &mut String); 8] = [
                        (i18n::keys::INPUT_SUGAR_IN_BEETS, &mut self.inputs.sugar_content_in_beets),
                        (i18n::keys::INPUT_CELL_JUICE_PURITY, &mut self.inputs.cell_juice_purity),
                        (
                            i18n::keys::INPUT_CRYSTALLIZATION_EFFECT,
                            &mut self.inputs.crystallization_effect,
                        ),
                        (
                            i18n::keys::INPUT_LOSS_DECOMPOSITION,
                            &mut self.inputs.sugar_loss_from_decomposition,
                        ),
                        (i18n::keys::INPUT_PULP_OUTPUT, &mut self.inputs.pulp_output),
                        (
                            i18n::keys::INPUT_DRY_MATTER_RAW,
                            &mut self.inputs.dry_matter_in_raw_pulp,
                        ),
                        (i18n::keys::INPUT_PULP_MASS_PERCENT, &mut self.inputs.pulp_mass_percent),
                        (
                            i18n::keys::INPUT_NORM_LOSS_PRESS,
                            &mut self.inputs.normal_dry_matter_loss_in_press,
                        ),
                    ];
                    for (key, field) in fields {
                        ui.label(tr.t(key));
                        ui.add(egui::TextEdit::singleline(field).desired_width(100.0));
                        ui.end_row();
                    }

                    ui.label(tr.t(i18n::keys::INPUT_DRY_MATTER_PRESSED));
                    ui.add(egui::Slider::new(
                        &mut self.inputs.dry_matter_in_pressed_pulp,
                        DRY_MATTER_RANGE,
                    ));
                    ui.end_row();

                    ui.label(tr.t(i18n::keys::INPUT_SUGAR_IN_PULP));
                    ui.add(
                        egui::Slider::new(&mut self.inputs.sugar_content_in_pulp, SUGAR_CONTENT_RANGE)
                            .step_by(0.1),
                    );
                    ui.end_row();
                });
        });

        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(txt("gui.calc.mode_heading", "Operation mode"));
            for mode in OperationMode::ALL {
                ui.selectable_value(
                    &mut self.inputs.selected_mode,
                    mode,
                    tr.t(i18n::mode_label_key(mode)),
                );
            }
        });

        ui.add_space(8.0);
        if ui.button(txt("gui.calc.button", "Calculate")).clicked() {
            self.results = Some(calculator::calculate(&self.inputs));
        }

        if let Some(results) = &self.results {
            ui.add_space(8.0);
            ui.heading(txt("gui.calc.results_heading", "Calculation results"));
            egui::Frame::group(ui.style()).show(ui, |ui| {
                egui::Grid::new("results_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        let rows = [
                            (
                                i18n::keys::RESULT_DIFFUSION_JUICE_PURITY,
                                &results.diffusion_juice_purity,
                            ),
                            (
                                i18n::keys::RESULT_PRESSED_PULP_OUTPUT,
                                &results.pressed_pulp_output,
                            ),
                            (
                                i18n::keys::RESULT_PRESSED_PULP_WATER_OUTPUT,
                                &results.pressed_pulp_water_output,
                            ),
                            (
                                i18n::keys::RESULT_SUGAR_LOSS_WITH_PULP,
                                &results.sugar_loss_with_pulp,
                            ),
                            (
                                i18n::keys::RESULT_SUGAR_LOSS_IN_MOLASSES,
                                &results.sugar_loss_in_molasses,
                            ),
                            (i18n::keys::RESULT_SUGAR_OUTPUT, &results.sugar_output),
                            (
                                i18n::keys::RESULT_OPTIMAL_SUGAR_CONTENT,
                                &results.optimal_sugar_content,
                            ),
                        ];
                        for (key, value) in rows {
                            ui.label(tr.t(key));
                            ui.strong(value);
                            ui.end_row();
                        }
                    });
            });
        }
    }

    /// Крива оптимізаційного рівняння поточного режиму з позначкою
    /// оптимуму, знайденого перебором.
    fn ui_curve(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let eq = OptimizationEquation::select(
            self.inputs.selected_mode,
            self.inputs.dry_matter_in_pressed_pulp,
        );
        ui.heading(tr.t(i18n::equation_label_key(eq)));
        ui.add_space(6.0);

        let curves = [(eq, egui::Color32::RED, String::new())];
        let optimum = optimizer::find_maximum(0.4, 2.0, 0.1, |x| eq.eval(x));
        draw_chart(
            ui,
            &curves,
            0.4,
            2.0,
            None,
            Some(optimum),
            &txt("gui.chart.x_label", "Sugar content, %"),
            &txt("gui.chart.y_label", "Sugar output, %"),
        );
        ui.add_space(4.0);
        ui.label(format!(
            "{}: x = {optimum:.1}, f(x) = {:.3}",
            txt("gui.chart.optimum", "Optimum"),
            eq.eval(optimum)
        ));
    }

    /// Порівняльний графік трьох режимів роботи за поточного ступеня
    /// пресування. Діапазон осі Y фіксований, щоб криві було зручно
    /// зіставляти між режимами.
    fn ui_comparison(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.cmp.heading", "Comparative analysis of operation modes"));
        ui.add_space(6.0);

        let dm = self.inputs.dry_matter_in_pressed_pulp;
        let curves: Vec<(OptimizationEquation, egui::Color32, String)> = [
            (OperationMode::WithoutReturn, egui::Color32::BLUE),
            (OperationMode::WithReturnWithoutCleaning, egui::Color32::RED),
            (
                OperationMode::WithReturnWithCleaning,
                egui::Color32::from_rgb(0, 160, 0),
            ),
        ]
        .into_iter()
        .map(|(mode, color)| {
            (
                OptimizationEquation::select(mode, dm),
                color,
                tr.t(i18n::mode_label_key(mode)).to_string(),
            )
        })
        .collect();

        draw_chart(
            ui,
            &curves,
            0.4,
            2.0,
            Some((10.0, 15.0)),
            None,
            &txt("gui.chart.x_label", "Sugar content, %"),
            &txt("gui.chart.y_label", "Sugar output, %"),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            for (_, color, label) in &curves {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, *color);
                ui.label(label);
                ui.add_space(12.0);
            }
        });
    }

    /// Модальне вікно налаштувань.
    fn ui_settings_modal(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_settings_modal;
        egui::Window::new(txt("gui.settings.title", "Settings"))
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(txt("gui.settings.language", "Language (uk/en/auto)"));
                    ui.add(egui::TextEdit::singleline(&mut self.lang_input).desired_width(80.0));
                    if ui.button(txt("gui.settings.save", "Save")).clicked() {
                        self.config.language = self.lang_input.trim().to_lowercase();
                        let lang =
                            i18n::resolve_language("auto", Some(self.config.language.as_str()));
                        self.tr = i18n::Translator::new_with_pack(
                            &lang,
                            self.config.language_pack_dir.as_deref(),
                        );
                        self.lang_save_status = match self.config.save() {
                            Ok(()) => Some(txt("gui.settings.saved", "Saved")),
                            Err(e) => Some(e.to_string()),
                        };
                    }
                });
                if let Some(status) = &self.lang_save_status {
                    ui.label(status);
                }
                ui.separator();

                ui.label(txt("gui.settings.default_mode", "Default operation mode"));
                for mode in OperationMode::ALL {
                    if ui
                        .selectable_value(
                            &mut self.config.default_mode,
                            mode,
                            tr.t(i18n::mode_label_key(mode)),
                        )
                        .changed()
                    {
                        let _ = self.config.save();
                    }
                }
                ui.separator();

                ui.add(
                    egui::Slider::new(&mut self.font_size, 10.0..=24.0)
                        .text(txt("gui.settings.font_size", "Font size")),
                );
                ui.add(
                    egui::Slider::new(&mut self.ui_scale, 0.75..=2.0)
                        .text(txt("gui.settings.ui_scale", "UI scale")),
                );
                ui.horizontal(|ui| {
                    ui.label(txt("gui.settings.theme", "Theme"));
                    ui.selectable_value(
                        &mut self.theme,
                        ThemeChoice::System,
                        txt("gui.settings.theme_system", "System"),
                    );
                    ui.selectable_value(
                        &mut self.theme,
                        ThemeChoice::Light,
                        txt("gui.settings.theme_light", "Light"),
                    );
                    ui.selectable_value(
                        &mut self.theme,
                        ThemeChoice::Dark,
                        txt("gui.settings.theme_dark", "Dark"),
                    );
                });
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label(txt("gui.settings.custom_font", "Custom font"));
                    if ui
                        .button(txt("gui.settings.pick_font", "Pick font file…"))
                        .clicked()
                    {
                        if let Some(path) = FileDialog::new()
                            .add_filter("font", &["ttf", "otf"])
                            .pick_file()
                        {
                            self.custom_font_path = path.display().to_string();
                            self.font_load_error =
                                load_custom_font(ctx, &self.custom_font_path).err();
                        }
                    }
                });
                if !self.custom_font_path.is_empty() {
                    ui.small(&self.custom_font_path);
                }
                if let Some(err) = &self.font_load_error {
                    ui.colored_label(egui::Color32::RED, err);
                }
            });
        self.show_settings_modal = open;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        match self.theme {
            ThemeChoice::System => {}
            ThemeChoice::Light => ctx.set_visuals(egui::Visuals::light()),
            ThemeChoice::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
        ctx.set_pixels_per_point(self.ui_scale);
        let mut style = (*ctx.style()).clone();
        for font_id in style.text_styles.values_mut() {
            font_id.size = match font_id.size {
                s if s > self.font_size * 1.2 => self.font_size * 1.4,
                _ => self.font_size,
            };
        }
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(i18n::keys::MAIN_MENU_TITLE).trim());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(txt("gui.top.settings", "Settings")).clicked() {
                        self.show_settings_modal = true;
                    }
                });
            });
        });

        if self.show_settings_modal {
            self.ui_settings_modal(ctx);
        }

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| self.ui_nav(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Calculator => self.ui_calculator(ui),
                Tab::Curve => self.ui_curve(ui),
                Tab::Comparison => self.ui_comparison(ui),
            });
        });
    }
}

/// Малює осі, засічки та криві рівнянь на полотні.
///
/// Якщо `y_range` не задано, діапазон Y береться з мінімуму/максимуму
/// просемпльованих значень першої кривої. `optimum` малює вертикальну
/// позначку знайденого оптимуму.
#[allow(clippy::too_many_arguments)]
fn draw_chart(
    ui: &mut egui::Ui,
    curves: &[(OptimizationEquation, egui::Color32, String)],
    min_x: f32,
    max_x: f32,
    y_range: Option<(f32, f32)>,
    optimum: Option<f32>,
    x_label: &str,
    y_label: &str,
) {
    let (response, painter) = ui.allocate_painter(
        egui::vec2(ui.available_width().min(640.0), 320.0),
        egui::Sense::hover(),
    );
    let rect = response.rect;
    let padding = 40.0;
    let left = rect.left() + padding;
    let right = rect.right() - padding;
    let top = rect.top() + padding * 0.5;
    let bottom = rect.bottom() - padding;
    let axis_stroke = egui::Stroke::new(2.0, egui::Color32::GRAY);
    let text_color = ui.visuals().text_color();

    // 100 кроків семплювання на криву
    let steps = 100;
    let step = (max_x - min_x) / steps as f32;

    let (min_y, max_y) = match y_range {
        Some(r) => r,
        None => {
            let mut min_y = f32::INFINITY;
            let mut max_y = f32::NEG_INFINITY;
            let eq = curves[0].0;
            let mut x = min_x;
            while x <= max_x {
                let y = eq.eval(x);
                if y < min_y {
                    min_y = y;
                }
                if y > max_y {
                    max_y = y;
                }
                x += step;
            }
            if !min_y.is_finite() || !max_y.is_finite() {
                (10.0, 15.0)
            } else {
                (min_y, max_y)
            }
        }
    };

    // Осі
    painter.line_segment(
        [egui::pos2(left, bottom), egui::pos2(right, bottom)],
        axis_stroke,
    );
    painter.line_segment(
        [egui::pos2(left, bottom), egui::pos2(left, top)],
        axis_stroke,
    );

    // Засічки та підписи: по 5 на кожну вісь
    for i in 0..=4 {
        let x_val = min_x + i as f32 * (max_x - min_x) / 4.0;
        let x_pos = chart_pos(x_val, min_x, max_x, left, right);
        painter.line_segment(
            [egui::pos2(x_pos, bottom), egui::pos2(x_pos, bottom + 6.0)],
            egui::Stroke::new(1.0, egui::Color32::GRAY),
        );
        painter.text(
            egui::pos2(x_pos, bottom + 8.0),
            egui::Align2::CENTER_TOP,
            format!("{x_val:.1}"),
            egui::FontId::proportional(11.0),
            text_color,
        );

        let y_val = min_y + i as f32 * (max_y - min_y) / 4.0;
        let y_pos = chart_pos(y_val, min_y, max_y, bottom, top);
        painter.line_segment(
            [egui::pos2(left - 6.0, y_pos), egui::pos2(left, y_pos)],
            egui::Stroke::new(1.0, egui::Color32::GRAY),
        );
        painter.text(
            egui::pos2(left - 8.0, y_pos),
            egui::Align2::RIGHT_CENTER,
            format!("{y_val:.1}"),
            egui::FontId::proportional(11.0),
            text_color,
        );
    }

    // Криві
    for (eq, color, _) in curves {
        let mut points = Vec::with_capacity(steps + 1);
        let mut x = min_x;
        while x <= max_x {
            let y = eq.eval(x);
            points.push(egui::pos2(
                chart_pos(x, min_x, max_x, left, right),
                chart_pos(y, min_y, max_y, bottom, top),
            ));
            x += step;
        }
        painter.add(egui::Shape::line(points, egui::Stroke::new(2.0, *color)));
    }

    // Позначка оптимуму першої кривої
    if let Some(opt_x) = optimum {
        let eq = curves[0].0;
        let x_pos = chart_pos(opt_x, min_x, max_x, left, right);
        let y_pos = chart_pos(eq.eval(opt_x), min_y, max_y, bottom, top);
        painter.line_segment(
            [egui::pos2(x_pos, bottom), egui::pos2(x_pos, y_pos)],
            egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
        );
        painter.circle_filled(egui::pos2(x_pos, y_pos), 4.0, egui::Color32::DARK_GRAY);
    }

    // Підписи осей
    painter.text(
        egui::pos2((left + right) / 2.0, rect.bottom() - 4.0),
        egui::Align2::CENTER_BOTTOM,
        x_label,
        egui::FontId::proportional(12.0),
        text_color,
    );
    painter.text(
        egui::pos2(rect.left() + 4.0, top - 4.0),
        egui::Align2::LEFT_BOTTOM,
        y_label,
        egui::FontId::proportional(12.0),
        text_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_pos_maps_range_endpoints() {
        assert!((chart_pos(0.4, 0.4, 2.0, 40.0, 600.0) - 40.0).abs() < 1e-3);
        assert!((chart_pos(2.0, 0.4, 2.0, 40.0, 600.0) - 600.0).abs() < 1e-3);
        // Вісь Y інвертована: більші значення вище (менша координата)
        assert!(chart_pos(14.0, 10.0, 15.0, 300.0, 20.0) < chart_pos(11.0, 10.0, 15.0, 300.0, 20.0));
    }

    #[test]
    fn chart_pos_degenerate_range_stays_at_origin() {
        assert_eq!(chart_pos(1.0, 1.0, 1.0, 40.0, 600.0), 40.0);
    }

    #[test]
    fn default_app_uses_config_mode() {
        let cfg = config::Config {
            default_mode: OperationMode::WithReturnWithCleaning,
            ..config::Config::default()
        };
        let app = GuiApp::new(cfg);
        assert_eq!(
            app.inputs.selected_mode,
            OperationMode::WithReturnWithCleaning
        );
        assert!(app.results.is_none());
    }
}
