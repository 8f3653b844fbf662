use orrery_engine::{
    frame_to_json, pack_frame, Frame, FrameBuffer, SceneAssembler, SceneError, SceneOptions,
    TimeSlider,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// UI control state, sampled once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub time: TimeSlider,
    pub show_orbits: bool,
    pub show_asteroids: bool,
    /// Body shown in the inspector panel.
    pub inspected: String,
}

impl Controls {
    pub fn new(inspected: impl Into<String>) -> Self {
        Self {
            time: TimeSlider::default(),
            show_orbits: true,
            show_asteroids: true,
            inspected: inspected.into(),
        }
    }

    pub fn options(&self) -> SceneOptions {
        SceneOptions {
            show_orbits: self.show_orbits,
            show_asteroids: self.show_asteroids,
        }
    }
}

/// Drives the assembler from browser controls.
///
/// The JS side sets controls, calls `tick`, then reads the packed frame
/// straight out of linear memory through the pointer accessors.
pub struct FrameRunner {
    assembler: SceneAssembler,
    controls: Controls,
    rng: StdRng,
    frame: Option<Frame>,
    buffer: FrameBuffer,
}

impl FrameRunner {
    pub fn new(assembler: SceneAssembler, seed: u64) -> Self {
        let inspected = assembler.catalog().central().name.clone();
        Self {
            assembler,
            controls: Controls::new(inspected),
            rng: StdRng::seed_from_u64(seed),
            frame: None,
            buffer: FrameBuffer::default(),
        }
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Set the time slider. Returns the clamped, snapped value.
    pub fn set_time(&mut self, years: f64) -> f64 {
        self.controls.time.set(years)
    }

    pub fn set_show_orbits(&mut self, show: bool) {
        self.controls.show_orbits = show;
    }

    pub fn set_show_asteroids(&mut self, show: bool) {
        self.controls.show_asteroids = show;
    }

    /// Point the inspector at `name`. Unknown names leave the selection alone.
    pub fn select_body(&mut self, name: &str) -> Result<(), SceneError> {
        self.assembler.catalog().get(name)?;
        self.controls.inspected = name.to_string();
        Ok(())
    }

    /// Build and pack the frame for the current controls.
    pub fn tick(&mut self) -> Result<(), SceneError> {
        let time = self.controls.time.value();
        let frame = self
            .assembler
            .assemble(time, self.controls.options(), &mut self.rng)?;
        self.buffer = pack_frame(&frame);
        self.frame = Some(frame);
        Ok(())
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Last frame as JSON, or `None` before the first tick.
    pub fn frame_json(&self) -> Result<Option<String>, SceneError> {
        self.frame.as_ref().map(frame_to_json).transpose()
    }

    /// Inspector panel text: name, kind label, then one line per stat.
    pub fn inspector_text(&self) -> Result<String, SceneError> {
        let inspection = self.assembler.catalog().inspect(&self.controls.inspected)?;
        let mut lines = vec![inspection.name.to_string(), inspection.kind.label().to_string()];
        lines.extend(inspection.lines());
        Ok(lines.join("\n"))
    }

    pub fn body_names(&self) -> Vec<String> {
        self.assembler.catalog().names().map(str::to_string).collect()
    }

    // ---- Pointer accessors for linear-memory reads ----

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_len(&self) -> u32 {
        self.buffer.len() as u32
    }

    pub fn primitive_count(&self) -> u32 {
        self.buffer.primitive_count() as u32
    }

    pub fn vertex_count(&self) -> u32 {
        self.buffer.vertex_count() as u32
    }

    pub fn time(&self) -> f64 {
        self.controls.time.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::PrimitiveTag;

    fn runner() -> FrameRunner {
        FrameRunner::new(SceneAssembler::solar_system().unwrap(), 7)
    }

    #[test]
    fn defaults() {
        let r = runner();
        let c = r.controls();
        assert_eq!(c.time.value(), 0.0);
        assert!(c.show_orbits);
        assert!(c.show_asteroids);
        assert_eq!(c.inspected, "Sun");
        assert_eq!(r.buffer_len(), 0);
        assert!(r.frame_json().unwrap().is_none());
    }

    #[test]
    fn time_is_clamped_and_snapped() {
        let mut r = runner();
        assert_eq!(r.set_time(12.3), 12.5);
        assert_eq!(r.set_time(-4.0), 0.0);
        assert_eq!(r.set_time(250.0), 100.0);
        assert_eq!(r.time(), 100.0);
    }

    #[test]
    fn tick_packs_current_controls() {
        let mut r = runner();
        r.set_time(3.0);
        r.set_show_orbits(false);
        r.tick().unwrap();

        let frame = r.frame().unwrap();
        assert_eq!(frame.time, 3.0);
        assert_eq!(frame.count_tagged(PrimitiveTag::OrbitRing), 0);
        assert_eq!(r.primitive_count() as usize, frame.len());
        assert_eq!(r.vertex_count() as usize, frame.vertex_count());
        assert!(r.buffer_len() > 0);

        r.set_show_asteroids(false);
        r.tick().unwrap();
        assert!(r.frame().unwrap().find_by_name("Asteroid Belt").is_none());
    }

    #[test]
    fn inspector_follows_selection() {
        let mut r = runner();
        r.select_body("Saturn").unwrap();
        let text = r.inspector_text().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Saturn");
        assert_eq!(lines[1], "Gas Giant");
        assert_eq!(lines[2], "Mass: 5.683 × 10^26 kg");
    }

    #[test]
    fn unknown_selection_is_rejected() {
        let mut r = runner();
        assert!(matches!(
            r.select_body("Pluto"),
            Err(SceneError::NotFound { .. })
        ));
        assert_eq!(r.controls().inspected, "Sun");
    }

    #[test]
    fn body_names_in_catalog_order() {
        let names = runner().body_names();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "Sun");
        assert_eq!(names[8], "Neptune");
    }

    #[test]
    fn json_after_tick() {
        let mut r = runner();
        r.tick().unwrap();
        let json = r.frame_json().unwrap().unwrap();
        assert!(json.contains("Interactive Solar System Simulation"));
    }
}
