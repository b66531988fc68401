use std::sync::Arc;

use bazi_calendar::cycle::Pillar;
use bazi_calendar::element::DISPLAY_ORDER;
use bazi_calendar::{
    CalendarError, ChineseLunarCalendar, Config, Element, LiveChart, ParallelChartCalculator,
    SymbolStyle, SystemClock,
};
use chrono::Timelike;
use eframe::{App, Frame};
use egui::{Color32, Context, RichText, Ui};
use tracing::{error, info};

const CJK_FONT_NAME: &str = "cjk";

fn element_color(element: Element) -> Color32 {
    match element {
        Element::Wood => Color32::from_rgb(76, 175, 80),
        Element::Fire => Color32::from_rgb(229, 57, 53),
        Element::Earth => Color32::from_rgb(191, 144, 0),
        Element::Metal => Color32::from_rgb(176, 176, 176),
        Element::Water => Color32::from_rgb(30, 136, 229),
    }
}

fn symbol_color(symbol: char) -> Color32 {
    Element::of_symbol(symbol)
        .map(element_color)
        .unwrap_or(Color32::GRAY)
}

pub struct BaziClock {
    live: LiveChart,
    clock: SystemClock,
    config: Config,
    style: SymbolStyle,
}

impl BaziClock {
    pub fn new(ctx: &Context, config: Config) -> Self {
        let style = match configure_fonts(ctx, &config) {
            Ok(true) => config.symbol_style,
            Ok(false) => SymbolStyle::Pinyin,
            Err(e) => {
                error!("{}", e);
                SymbolStyle::Pinyin
            }
        };

        let calculator = Arc::new(ParallelChartCalculator::with_capacity(config.cache_capacity));
        let clock = SystemClock;
        let live = LiveChart::new(calculator, Box::new(ChineseLunarCalendar), &clock);
        info!(?style, "live chart started");

        Self {
            live,
            clock,
            config,
            style,
        }
    }

    fn render_clock(&self, ui: &mut Ui) {
        let snap = self.live.snapshot();
        ui.heading(
            RichText::new(format!(
                "{:02}:{:02}:{:02}",
                snap.now.hour(),
                snap.now.minute(),
                snap.now.second()
            ))
            .size(40.0)
            .strong(),
        );
        if self.style == SymbolStyle::Hanzi {
            ui.label(&snap.gregorian_text);
            ui.label(&snap.lunar_text);
        } else {
            ui.label(format!("Gregorian: {}", snap.now.format("%Y/%m/%d %H:%M")));
            ui.label(format!("Lunar label: {}", snap.profile.lunar.label(self.style)));
        }
    }

    fn render_pillars(&self, ui: &mut Ui) {
        let chart = &self.live.snapshot().profile.chart;
        let columns: [(&str, Pillar); 4] = [
            ("Hour", chart.hour),
            ("Day", chart.day),
            ("Month", chart.month),
            ("Year", chart.year),
        ];
        egui::Grid::new("live_pillars")
            .num_columns(4)
            .spacing([32.0, 6.0])
            .show(ui, |ui| {
                for (name, _) in columns.iter() {
                    ui.label(RichText::new(*name).weak());
                }
                ui.end_row();
                for (_, pillar) in columns.iter() {
                    ui.label(
                        RichText::new(pillar.stem.label(self.style))
                            .size(32.0)
                            .color(symbol_color(pillar.stem.hanzi())),
                    );
                }
                ui.end_row();
                for (_, pillar) in columns.iter() {
                    ui.label(
                        RichText::new(pillar.branch.label(self.style))
                            .size(32.0)
                            .color(symbol_color(pillar.branch.hanzi())),
                    );
                }
                ui.end_row();
            });
    }

    fn render_details(&self, ui: &mut Ui) {
        let snap = self.live.snapshot();
        let profile = &snap.profile;
        ui.label(format!("Zodiac: {}", profile.zodiac.label(self.style)));
        ui.label(format!(
            "Constellation: {}",
            profile.constellation.label(self.style)
        ));
        ui.add_space(8.0);

        for element in DISPLAY_ORDER {
            let count = profile.elements.get(element);
            ui.horizontal(|ui| {
                ui.label(RichText::new(element.label(self.style)).color(element_color(element)));
                ui.add(
                    egui::ProgressBar::new(profile.elements.bar_fraction(element))
                        .desired_width(200.0)
                        .fill(element_color(element))
                        .text(count.to_string()),
                );
            });
        }
        ui.add_space(8.0);
        ui.label(snap.analysis.render(self.style));
    }

    fn render_hourly(&self, ui: &mut Ui) {
        let slots = &self.live.snapshot().hourly;
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                for slot in slots.iter() {
                    let frame = if slot.active {
                        egui::Frame::group(ui.style()).fill(ui.visuals().selection.bg_fill)
                    } else {
                        egui::Frame::group(ui.style())
                    };
                    frame.show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new(slot.pillar.stem.label(self.style))
                                    .color(symbol_color(slot.pillar.stem.hanzi())),
                            );
                            ui.label(
                                RichText::new(slot.pillar.branch.label(self.style))
                                    .color(symbol_color(slot.pillar.branch.hanzi())),
                            );
                            ui.small(slot.window);
                        });
                    });
                }
            });
        });
    }
}

impl App for BaziClock {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.live.tick(&self.clock);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_clock(ui);
                ui.separator();
                self.render_pillars(ui);
                ui.separator();
                self.render_details(ui);
                ui.separator();
                self.render_hourly(ui);
            });
        });

        ctx.request_repaint_after(self.config.refresh_interval);
    }
}

/// Install the configured CJK font. Returns whether one was installed.
fn configure_fonts(ctx: &Context, config: &Config) -> Result<bool, CalendarError> {
    let Some(path) = config.cjk_font_path.as_ref() else {
        return Ok(false);
    };
    let bytes = std::fs::read(path).map_err(|source| CalendarError::FontRead {
        path: path.clone(),
        source,
    })?;

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), egui::FontData::from_owned(bytes));
    // Keep the default fonts first and fall back to CJK for missing glyphs.
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
    info!("Loaded CJK font from {}", path.display());
    Ok(true)
}
