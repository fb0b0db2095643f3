use rank_chart::{svg, ChartLayout, Primitive, Viewport};
use rank_data::{RankRecord, RankStore};

/// The names currently on display together with the viewport they are drawn
/// into. Every query recomputes the chart from scratch.
#[derive(Debug, Clone)]
pub struct Session {
    layout: ChartLayout,
    viewport: Viewport,
    records: Vec<RankRecord>,
}

impl Session {
    pub fn new(layout: ChartLayout, viewport: Viewport) -> Self {
        Self {
            layout,
            viewport,
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: RankRecord) {
        log::debug!("adding '{}' to display list", record.name());
        self.records.push(record);
    }

    /// Look up `name` and append it to the display list. Returns `false` if
    /// the store does not know the name.
    pub fn add_name(&mut self, name: &str, store: &RankStore) -> bool {
        match store.find(name) {
            Some(record) => {
                self.add(record);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        log::debug!("clearing {} series", self.records.len());
        self.records.clear();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn records(&self) -> &[RankRecord] {
        &self.records
    }

    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name().to_string()).collect()
    }

    pub fn primitives(&self) -> Vec<Primitive> {
        self.layout.compute(self.viewport, &self.records)
    }

    pub fn to_svg(&self) -> String {
        svg::render_chart(self.viewport, &self.primitives(), self.layout.config())
    }
}
