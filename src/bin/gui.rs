#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints};
use image::GenericImageView;
use std::ops::RangeInclusive;
use std::time::Instant;
use std::{env, fs, path::Path};

use solar_roi_calculator::{
    animation::AnimatedValue,
    cashflow,
    chart::{self, Theme},
    config,
    controller::{self, AreaState},
    format, i18n,
    projection::{self, ProjectionResult},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
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
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(980.0, 760.0));
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
        "Solar ROI Calculator",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font note: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 표시를 위해 시스템 폰트를 탐색해 등록한다. 찾지 못하면 Err를
/// 반환하고 기본(라틴) 폰트로 동작한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = Vec::new();
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(name));
        }
    }
    for p in [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ] {
        candidates.push(Path::new(p).to_path_buf());
    }
    for path in candidates {
        if path.exists() {
            let bytes =
                fs::read(&path).map_err(|e| format!("font read failed ({}): {e}", path.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("no Korean-capable system font found; falling back to built-in fonts".into())
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
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
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn color(rgb: chart::Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculator,
    YearlyTable,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    theme: Theme,
    ui_scale: f32,
    show_settings_modal: bool,
    show_help_modal: bool,
    // 입력 및 파생 상태
    area: AreaState,
    result: ProjectionResult,
    series: Vec<f64>,
    // 애니메이션 표시 슬롯
    size_slot: AnimatedValue,
    cost_slot: AnimatedValue,
    production_slot: AnimatedValue,
    savings_slot: AnimatedValue,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let resolved = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&resolved, config.language_pack_dir.as_deref());
        let theme = if config.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        };
        let area = AreaState::with_value(config.default_area_m2);
        let result = projection::compute(f64::from(area.get()));
        let series = cashflow::project(
            result.system_cost,
            result.annual_savings,
            projection::SAVINGS_ESCALATION_RATE,
            projection::PROJECTION_YEARS,
        );
        let now = Instant::now();
        let mut app = Self {
            lang_input: config.language.clone(),
            lang_save_status: None,
            tab: Tab::Calculator,
            theme,
            ui_scale: 1.0,
            show_settings_modal: false,
            show_help_modal: false,
            area,
            result: result.clone(),
            series,
            size_slot: AnimatedValue::new(0.0),
            cost_slot: AnimatedValue::new(0.0),
            production_slot: AnimatedValue::new(0.0),
            savings_slot: AnimatedValue::new(0.0),
            config,
            tr,
        };
        // 시작 시 0에서 첫 목표값으로 한 번 전환한다.
        app.retarget_slots(&result, now);
        app
    }

    /// 면적 변경 후 전체 파이프라인을 다시 돌린다: 전망 계산 → 시계열
    /// 재생성 → 표시 슬롯 재목표.
    fn recompute(&mut self, now: Instant) {
        let result = projection::compute(f64::from(self.area.get()));
        self.series = cashflow::project(
            result.system_cost,
            result.annual_savings,
            projection::SAVINGS_ESCALATION_RATE,
            projection::PROJECTION_YEARS,
        );
        self.retarget_slots(&result, now);
        self.result = result;
    }

    fn retarget_slots(&mut self, result: &ProjectionResult, now: Instant) {
        self.size_slot.animate_to(result.system_size_kw, now);
        self.cost_slot.animate_to(result.system_cost, now);
        self.production_slot
            .animate_to(result.annual_production_kwh, now);
        self.savings_slot.animate_to(result.annual_savings, now);
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(self.txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Calculator, self.txt("gui.tab.calculator", "Calculator")),
            (Tab::YearlyTable, self.txt("gui.tab.table", "Yearly Table")),
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
                .on_hover_text(self.txt("gui.nav.switch_tip", "Switch view"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        heading_with_tip(
            ui,
            &self.txt("gui.calc.heading", "Solar ROI Calculator"),
            &self.txt(
                "gui.calc.tip",
                "Estimate solar-panel return on investment from rooftop area.",
            ),
        );
        ui.add_space(8.0);

        // 면적 입력: 슬라이더 + ±5 버튼 + 현재값 표시
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.txt("gui.calc.area_label", "Rooftop area"));
                let mut value = self.area.get();
                let slider = egui::Slider::new(
                    &mut value,
                    controller::AREA_MIN..=controller::AREA_MAX,
                )
                .suffix(" m²");
                let resp = ui
                    .add(slider)
                    .on_hover_text(self.txt("gui.calc.area_tip", "Drag, or step by 5 m²."));
                if resp.changed() {
                    self.area.set(value);
                    self.recompute(Instant::now());
                }
                if ui
                    .button("-5")
                    .on_hover_text(self.txt("gui.calc.step_down_tip", "Decrease area by 5 m²"))
                    .clicked()
                    && self.area.decrement()
                {
                    self.recompute(Instant::now());
                }
                if ui
                    .button("+5")
                    .on_hover_text(self.txt("gui.calc.step_up_tip", "Increase area by 5 m²"))
                    .clicked()
                    && self.area.increment()
                {
                    self.recompute(Instant::now());
                }
                ui.label(format!("{} m²", self.area.get()));
            });
        });
        ui.add_space(10.0);

        // 표시 슬롯 갱신: 프레임마다 경과 시간을 샘플링한다.
        let now = Instant::now();
        let size_kw = self.size_slot.tick(now);
        let cost = self.cost_slot.tick(now);
        let production = self.production_slot.tick(now);
        let savings = self.savings_slot.tick(now);
        if self.size_slot.is_animating()
            || self.cost_slot.is_animating()
            || self.production_slot.is_animating()
            || self.savings_slot.is_animating()
        {
            ui.ctx().request_repaint();
        }

        let cards = [
            (
                self.txt("gui.metric.system_size", "System Size"),
                format!("{} kW", format::number(size_kw, 1)),
            ),
            (
                self.txt("gui.metric.system_cost", "System Cost"),
                format::currency(cost),
            ),
            (
                self.txt("gui.metric.annual_production", "Annual Production"),
                format!("{} kWh", format::number(production, 0)),
            ),
            (
                self.txt("gui.metric.annual_savings", "Annual Savings"),
                format::currency(savings),
            ),
            (
                self.txt("gui.metric.co2", "CO₂ Offset / Year"),
                format!("{} t", format::number(self.result.co2_savings_tons, 1)),
            ),
            (
                self.txt("gui.metric.trees", "Trees Planted"),
                format::number(self.result.trees_planted, 0),
            ),
        ];
        egui::Grid::new("metric_cards")
            .num_columns(3)
            .spacing([16.0, 12.0])
            .show(ui, |ui| {
                for (idx, (label, value)) in cards.iter().enumerate() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_min_width(180.0);
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(label).small());
                            ui.heading(value);
                        });
                    });
                    if idx % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(12.0);

        ui.heading(self.txt("gui.chart.heading", "Cumulative Savings Projection"));
        ui.add_space(4.0);
        self.ui_chart(ui);
    }

    /// 누적 절감 차트. 위젯 id가 프레임 간 유지되므로 매 프레임 현재
    /// 시계열과 팔레트를 먹이면 데이터 교체/테마 전환이 된다.
    fn ui_chart(&mut self, ui: &mut egui::Ui) {
        let palette = chart::palette(self.theme);
        let dataset = self.txt("gui.chart.dataset", "Cumulative Savings");
        let points = PlotPoints::new(chart::series_points(&self.series));
        let line = Line::new(points)
            .name(&dataset)
            .color(color(palette.line))
            .fill(0.0);
        ui.scope(|ui| {
            let visuals = ui.visuals_mut();
            visuals.override_text_color = Some(color(palette.tick));
            visuals.widgets.noninteractive.bg_stroke.color = color(palette.grid);
            Plot::new("cumulative_savings")
                .height(320.0)
                .legend(Legend::default())
                .x_axis_formatter(
                    |mark: GridMark, _max_chars: usize, _range: &RangeInclusive<f64>| {
                        chart::x_tick_label(mark.value).unwrap_or_default()
                    },
                )
                .y_axis_formatter(
                    |mark: GridMark, _max_chars: usize, _range: &RangeInclusive<f64>| {
                        chart::y_tick_label(mark.value)
                    },
                )
                .label_formatter(move |name, value| {
                    let label = if name.is_empty() { dataset.as_str() } else { name };
                    format!(
                        "{label}\nYear {}: {}",
                        value.x.round() as i64,
                        format::currency(value.y)
                    )
                })
                .show(ui, |plot_ui| {
                    plot_ui.line(line);
                });
        });
    }

    fn ui_yearly_table(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.table.heading", "Cumulative cash flow, year by year"));
        ui.add_space(8.0);
        egui::Grid::new("cashflow_table")
            .num_columns(3)
            .striped(true)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new(self.txt("cashflow.col_year", "Year")).strong());
                ui.label(
                    egui::RichText::new(self.txt("cashflow.col_savings", "Savings that year"))
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(self.txt("cashflow.col_balance", "Cumulative balance"))
                        .strong(),
                );
                ui.end_row();
                for (year, balance) in self.series.iter().enumerate() {
                    let yearly = if year == 0 {
                        0.0
                    } else {
                        self.result.annual_savings
                            * (1.0 + projection::SAVINGS_ESCALATION_RATE).powi(year as i32 - 1)
                    };
                    ui.label(format!("{year}"));
                    ui.label(format::currency(yearly));
                    ui.label(format::currency(*balance));
                    ui.end_row();
                }
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 테마는 스타일에만 관여한다. 수치 재계산 없음.
        ctx.set_visuals(if self.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.txt("gui.nav.app_title", "Solar ROI Calculator"));
                ui.separator();
                let (icon, tip_key, tip_default) = if self.theme.is_dark() {
                    ("☀", "gui.theme.to_light_tip", "Switch to light theme")
                } else {
                    ("🌙", "gui.theme.to_dark_tip", "Switch to dark theme")
                };
                if ui
                    .button(icon)
                    .on_hover_text(self.txt(tip_key, tip_default))
                    .clicked()
                {
                    self.theme = self.theme.toggled();
                    self.config.dark_mode = self.theme.is_dark();
                }
                if ui
                    .button(self.txt("gui.settings.title", "Settings"))
                    .clicked()
                {
                    self.show_settings_modal = true;
                }
                if ui.button(self.txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut open = self.show_settings_modal;
            egui::Window::new(self.txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(self.txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(self.txt("gui.settings.ui_scale", "UI scale"));
                    let scale = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.label(self.txt("gui.settings.default_area", "Default area at startup"));
                    ui.add(
                        egui::Slider::new(
                            &mut self.config.default_area_m2,
                            controller::AREA_MIN..=controller::AREA_MAX,
                        )
                        .suffix(" m²"),
                    );
                    ui.separator();
                    ui.label(self.txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                self.tr
                                    .lookup("gui.settings.lang_auto")
                                    .unwrap_or_else(|| "System".to_string()),
                            );
                            ui.selectable_value(
                                &mut self.lang_input,
                                "en-us".into(),
                                "English (US)",
                            );
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui
                        .button(self.txt("gui.settings.save", "Save settings"))
                        .clicked()
                    {
                        self.config.language = self.lang_input.clone();
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        self.lang_save_status = Some(if let Err(e) = self.config.save() {
                            format!("Save error: {e}")
                        } else {
                            self.txt("gui.settings.saved", "Saved.")
                        });
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            self.show_settings_modal = open;
        }

        // 도움말 모달
        if self.show_help_modal {
            let mut open = self.show_help_modal;
            egui::Window::new(self.txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(self.txt("gui.about.app", "Offline solar-panel ROI estimator"));
                    ui.label(self.txt("gui.about.version", "Version: 0.1.0"));
                    ui.separator();
                    ui.heading(self.txt("gui.about.formula_title", "Model"));
                    ui.label(self.txt(
                        "gui.about.formula_projection",
                        "Projection: size = area / 10 kW; production = size × 1450 kWh; \
                         cost = size × ₩75,000; savings = production × ₩7.",
                    ));
                    ui.label(self.txt(
                        "gui.about.formula_cashflow",
                        "Cash flow: year 0 = -cost; year i adds savings × 1.03^(i-1). \
                         25-year horizon.",
                    ));
                    ui.label(self.txt(
                        "gui.about.formula_notes",
                        "CO₂: 0.82 kg/kWh, 50 trees per ton per year. Constants are fixed \
                         estimates, not quotes.",
                    ));
                });
            self.show_help_modal = open;
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Calculator => self.ui_calculator(ui),
                    Tab::YearlyTable => self.ui_yearly_table(ui),
                });
        });
    }
}
