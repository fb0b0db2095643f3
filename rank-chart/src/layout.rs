use rank_data::{RankRecord, DECADE_STEP, N_DECADES, START_DECADE};

use crate::color::{default_palette, Color, PALETTE_SIZE};

// ----------------------------------------------------------------------------
//
//
// Inputs and outputs
//
//
// ----------------------------------------------------------------------------

/// Size of the drawing area in device independent pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One drawable unit of the chart. Coordinates grow to the right and down.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Decade separators and the two horizontal bounding lines.
    GridLine { x0: f64, y0: f64, x1: f64, y1: f64 },
    YearLabel { text: String, x: f64, y: f64 },
    /// Connects the ranks of one series in two adjacent decades.
    Segment {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color_index: usize,
    },
    /// Rank of one series in one decade, `*` if unranked.
    PointLabel {
        text: String,
        x: f64,
        y: f64,
        color_index: usize,
    },
}

impl Primitive {
    pub fn color_index(&self) -> Option<usize> {
        match self {
            Primitive::Segment { color_index, .. } | Primitive::PointLabel { color_index, .. } => {
                Some(*color_index)
            }
            Primitive::GridLine { .. } | Primitive::YearLabel { .. } => None,
        }
    }
}

// ----------------------------------------------------------------------------
//
//
// LayoutConfig
//
//
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub n_decades: usize,
    pub start_decade: u32,
    pub decade_step: u32,
    /// Rank drawn at the bottom line; unranked decades are drawn here too.
    pub max_rank: u32,
    /// Space above and below the horizontal bounding lines.
    pub graph_margin: f64,
    /// Offset of the year labels below the lower bounding line.
    pub label_height: f64,
    pub palette: [Color; PALETTE_SIZE],
    /// Prefix point labels with the series name.
    pub label_with_name: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            n_decades: N_DECADES,
            start_decade: START_DECADE,
            decade_step: DECADE_STEP,
            max_rank: 1000,
            graph_margin: 20.0,
            label_height: 12.0,
            palette: default_palette(),
            label_with_name: false,
        }
    }
}

impl LayoutConfig {
    pub fn with_graph_margin(mut self, margin: f64) -> Self {
        self.graph_margin = margin;
        self
    }

    pub fn with_label_height(mut self, height: f64) -> Self {
        self.label_height = height;
        self
    }

    pub fn with_max_rank(mut self, max_rank: u32) -> Self {
        self.max_rank = max_rank;
        self
    }

    pub fn with_palette(mut self, palette: [Color; PALETTE_SIZE]) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_name_labels(mut self, flag: bool) -> Self {
        self.label_with_name = flag;
        self
    }

    /// Palette index used by the series at position `series` of the display
    /// list. The palette is cycled, so the fifth series reuses the first color.
    pub fn color_index(&self, series: usize) -> usize {
        series % PALETTE_SIZE
    }

    pub fn color_for(&self, series: usize) -> Color {
        self.palette[self.color_index(series)]
    }
}

// ----------------------------------------------------------------------------
//
//
// ChartLayout
//
//
// ----------------------------------------------------------------------------

/// Computes all primitives of a chart from scratch. Holds no state besides
/// its configuration, so the same inputs always give the same output.
#[derive(Debug, Clone, Default)]
pub struct ChartLayout {
    config: LayoutConfig,
}

/// Pixel mapping for one viewport.
#[derive(Debug, Clone, Copy)]
struct Scale {
    line_interval: f64,
    height_ratio: f64,
    margin: f64,
    max_rank: u32,
}

impl Scale {
    fn x(&self, decade: usize) -> f64 {
        self.line_interval * decade as f64
    }

    /// Unranked (0) is placed like `max_rank`, at the lower bounding line.
    fn y(&self, rank: u32) -> f64 {
        let effective = if rank == 0 { self.max_rank } else { rank };
        self.margin + effective as f64 * self.height_ratio
    }
}

impl ChartLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Grid and axis labels followed by each series in display order.
    ///
    /// Degenerate viewports (zero, negative or non-finite size) produce no
    /// primitives at all.
    pub fn compute(&self, viewport: Viewport, records: &[RankRecord]) -> Vec<Primitive> {
        let Some(scale) = self.scale(viewport) else {
            log::debug!("degenerate viewport {:?}, nothing to lay out", viewport);
            return Vec::new();
        };

        let mut primitives = self.grid(viewport, &scale);
        for (series, record) in records.iter().enumerate() {
            primitives.extend(self.series(series, record, &scale));
        }
        log::debug!(
            "laid out {} series into {} primitives",
            records.len(),
            primitives.len()
        );
        primitives
    }

    fn scale(&self, viewport: Viewport) -> Option<Scale> {
        let Viewport { width, height } = viewport;
        let cfg = &self.config;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }
        if cfg.n_decades == 0 || cfg.max_rank == 0 {
            return None;
        }
        Some(Scale {
            line_interval: width / cfg.n_decades as f64,
            height_ratio: (height - 2.0 * cfg.graph_margin) / cfg.max_rank as f64,
            margin: cfg.graph_margin,
            max_rank: cfg.max_rank,
        })
    }

    fn grid(&self, viewport: Viewport, scale: &Scale) -> Vec<Primitive> {
        let Viewport { width, height } = viewport;
        let cfg = &self.config;
        let mut grid = Vec::with_capacity(2 * cfg.n_decades + 1);

        for i in 1..cfg.n_decades {
            let x = scale.x(i);
            grid.push(Primitive::GridLine {
                x0: x,
                y0: 0.0,
                x1: x,
                y1: height,
            });
        }
        for i in 0..cfg.n_decades {
            grid.push(Primitive::YearLabel {
                text: (cfg.start_decade + cfg.decade_step * i as u32).to_string(),
                x: scale.x(i),
                y: height - cfg.graph_margin + cfg.label_height,
            });
        }
        for y in [cfg.graph_margin, height - cfg.graph_margin] {
            grid.push(Primitive::GridLine {
                x0: 0.0,
                y0: y,
                x1: width,
                y1: y,
            });
        }
        grid
    }

    fn series(&self, series: usize, record: &RankRecord, scale: &Scale) -> Vec<Primitive> {
        let cfg = &self.config;
        let color_index = cfg.color_index(series);
        // Decades beyond the record are treated as unranked.
        let rank = |decade: usize| record.rank_at(decade).unwrap_or(0);

        let mut primitives = Vec::with_capacity(2 * cfg.n_decades);
        for j in 0..cfg.n_decades {
            let (x, y) = (scale.x(j), scale.y(rank(j)));
            primitives.push(Primitive::PointLabel {
                text: self.point_text(record, rank(j)),
                x,
                y,
                color_index,
            });
            if j + 1 < cfg.n_decades {
                primitives.push(Primitive::Segment {
                    x0: x,
                    y0: y,
                    x1: scale.x(j + 1),
                    y1: scale.y(rank(j + 1)),
                    color_index,
                });
            }
        }
        primitives
    }

    fn point_text(&self, record: &RankRecord, rank: u32) -> String {
        let score = if rank == 0 {
            "*".to_string()
        } else {
            rank.to_string()
        };
        if self.config.label_with_name {
            format!("{} {}", record.name(), score)
        } else {
            score
        }
    }
}
