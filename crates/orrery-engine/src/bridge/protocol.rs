//! Flat frame buffer handed to the JS renderer.
//! Must stay in sync with the TypeScript reader.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Records: primitive_count × 12 floats]
//! [Vertices: vertex_count × 3 floats]
//! ```
//!
//! Section sizes depend on the frame, so the reader takes both offsets
//! from the header instead of computing them.

use crate::core::frame::Frame;
use crate::error::SceneError;
use crate::renderer::record::{PrimitiveRecord, Vertex};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_PRIMITIVE_COUNT: usize = 1;
pub const HEADER_VERTEX_COUNT: usize = 2;
pub const HEADER_RECORD_OFFSET: usize = 3;
pub const HEADER_VERTEX_OFFSET: usize = 4;
pub const HEADER_TIME: usize = 5;
pub const HEADER_SHOW_LEGEND: usize = 6;
pub const HEADER_RESERVED: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Section sizes and offsets for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolLayout {
    pub primitive_count: usize,
    pub vertex_count: usize,

    /// Size of the record table in floats.
    pub record_data_floats: usize,
    /// Size of the vertex section in floats.
    pub vertex_data_floats: usize,

    /// Offset (in floats) where the record table begins.
    pub record_data_offset: usize,
    /// Offset (in floats) where vertex data begins.
    pub vertex_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(primitive_count: usize, vertex_count: usize) -> Self {
        let record_data_floats = primitive_count * PrimitiveRecord::FLOATS;
        let vertex_data_floats = vertex_count * Vertex::FLOATS;

        let record_data_offset = HEADER_FLOATS;
        let vertex_data_offset = record_data_offset + record_data_floats;

        let buffer_total_floats = vertex_data_offset + vertex_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            primitive_count,
            vertex_count,
            record_data_floats,
            vertex_data_floats,
            record_data_offset,
            vertex_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    pub fn for_frame(frame: &Frame) -> Self {
        Self::new(frame.len(), frame.vertex_count())
    }
}

/// A packed frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameBuffer {
    floats: Vec<f32>,
}

impl FrameBuffer {
    pub fn as_slice(&self) -> &[f32] {
        &self.floats
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.floats)
    }

    /// Pointer to the first float, for handing to JS over linear memory.
    pub fn as_ptr(&self) -> *const f32 {
        self.floats.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.floats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty()
    }

    fn header(&self, field: usize) -> f32 {
        self.floats.get(field).copied().unwrap_or(0.0)
    }

    pub fn primitive_count(&self) -> usize {
        self.header(HEADER_PRIMITIVE_COUNT) as usize
    }

    pub fn vertex_count(&self) -> usize {
        self.header(HEADER_VERTEX_COUNT) as usize
    }

    /// Record table, reinterpreted.
    pub fn records(&self) -> &[PrimitiveRecord] {
        let start = self.header(HEADER_RECORD_OFFSET) as usize;
        let end = start + self.primitive_count() * PrimitiveRecord::FLOATS;
        match self.floats.get(start..end) {
            Some(section) => bytemuck::cast_slice(section),
            None => &[],
        }
    }

    /// Vertex section, reinterpreted.
    pub fn vertices(&self) -> &[Vertex] {
        let start = self.header(HEADER_VERTEX_OFFSET) as usize;
        let end = start + self.vertex_count() * Vertex::FLOATS;
        match self.floats.get(start..end) {
            Some(section) => bytemuck::cast_slice(section),
            None => &[],
        }
    }
}

/// Pack `frame` into the flat wire layout.
pub fn pack_frame(frame: &Frame) -> FrameBuffer {
    let layout = ProtocolLayout::for_frame(frame);
    let mut floats = Vec::with_capacity(layout.buffer_total_floats);

    let mut header = [0.0f32; HEADER_FLOATS];
    header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    header[HEADER_PRIMITIVE_COUNT] = layout.primitive_count as f32;
    header[HEADER_VERTEX_COUNT] = layout.vertex_count as f32;
    header[HEADER_RECORD_OFFSET] = layout.record_data_offset as f32;
    header[HEADER_VERTEX_OFFSET] = layout.vertex_data_offset as f32;
    header[HEADER_TIME] = frame.time as f32;
    header[HEADER_SHOW_LEGEND] = if frame.config.show_legend { 1.0 } else { 0.0 };
    header[HEADER_RESERVED] = 0.0;
    floats.extend_from_slice(&header);

    let mut vertex_offset = 0;
    for primitive in frame.iter() {
        let record = PrimitiveRecord::describe(primitive, vertex_offset);
        floats.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(&record)));
        vertex_offset += primitive.geometry.vertex_count();
    }

    for primitive in frame.iter() {
        for p in primitive.geometry.points() {
            floats.extend_from_slice(&[p.x, p.y, p.z]);
        }
    }

    debug_assert_eq!(floats.len(), layout.buffer_total_floats);
    FrameBuffer { floats }
}

/// Serialize the whole frame (config included) as JSON.
pub fn frame_to_json(frame: &Frame) -> Result<String, SceneError> {
    Ok(serde_json::to_string(frame)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::assembler::SceneAssembler;
    use crate::api::types::SceneOptions;
    use crate::components::color::Color;
    use crate::components::primitive::{Geometry, LineLoop, PointCloud, Primitive, PrimitiveTag};
    use crate::renderer::config::SceneConfig;
    use crate::renderer::record::{KIND_LINE_LOOP, KIND_POINT_CLOUD};
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_frame() -> Frame {
        let mut frame = Frame::new(2.5, SceneConfig::default());
        frame.push(Primitive::new(
            PrimitiveTag::Starfield,
            Geometry::PointCloud(PointCloud {
                points: vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)],
            }),
            Color::WHITE,
        ));
        frame.push(
            Primitive::new(
                PrimitiveTag::OrbitRing,
                Geometry::LineLoop(LineLoop {
                    points: vec![Vec3::X, Vec3::Y, Vec3::X],
                }),
                Color::rgb(0.0, 1.0, 0.0),
            )
            .with_style(1.0, 0.5),
        );
        frame
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 200);
        assert_eq!(layout.record_data_offset, HEADER_FLOATS);
        assert_eq!(layout.vertex_data_offset, HEADER_FLOATS + 10 * 12);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 10 * 12 + 200 * 3);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn header_describes_sections() {
        let buf = pack_frame(&small_frame());
        let h = &buf.as_slice()[..HEADER_FLOATS];
        assert_eq!(h[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(h[HEADER_PRIMITIVE_COUNT], 2.0);
        assert_eq!(h[HEADER_VERTEX_COUNT], 5.0);
        assert_eq!(h[HEADER_RECORD_OFFSET], 8.0);
        assert_eq!(h[HEADER_VERTEX_OFFSET], 8.0 + 24.0);
        assert_eq!(h[HEADER_TIME], 2.5);
        assert_eq!(h[HEADER_SHOW_LEGEND], 0.0);
        assert_eq!(buf.len(), 8 + 24 + 15);
        assert_eq!(buf.as_bytes().len(), buf.len() * 4);
    }

    #[test]
    fn records_index_into_vertex_section() {
        let buf = pack_frame(&small_frame());
        let records = buf.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, KIND_POINT_CLOUD);
        assert_eq!(records[0].vertex_offset, 0.0);
        assert_eq!(records[0].vertex_count, 2.0);
        assert_eq!(records[1].kind, KIND_LINE_LOOP);
        assert_eq!(records[1].vertex_offset, 2.0);
        assert_eq!(records[1].opacity, 0.5);
        assert_eq!(records[1].g, 1.0);

        let verts = buf.vertices();
        assert_eq!(verts.len(), 5);
        assert_eq!(
            verts[1],
            Vertex {
                x: 4.0,
                y: 5.0,
                z: 6.0
            }
        );
        assert_eq!(
            verts[3],
            Vertex {
                x: 0.0,
                y: 1.0,
                z: 0.0
            }
        );
    }

    #[test]
    fn solar_frame_sizes_match_counts() {
        let assembler = SceneAssembler::solar_system().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let frame = assembler.assemble(10.0, SceneOptions::default(), &mut rng).unwrap();
        let buf = pack_frame(&frame);

        let layout = ProtocolLayout::for_frame(&frame);
        assert_eq!(buf.len(), layout.buffer_total_floats);
        assert_eq!(buf.primitive_count(), frame.len());
        assert_eq!(buf.vertex_count(), frame.vertex_count());

        let records = buf.records();
        let last = records[records.len() - 1];
        assert_eq!(
            (last.vertex_offset + last.vertex_count) as usize,
            frame.vertex_count()
        );
    }

    #[test]
    fn empty_frame_is_header_only() {
        let buf = pack_frame(&Frame::new(0.0, SceneConfig::default()));
        assert_eq!(buf.len(), HEADER_FLOATS);
        assert!(buf.records().is_empty());
        assert!(buf.vertices().is_empty());
    }

    #[test]
    fn json_carries_config_and_primitives() {
        let json = frame_to_json(&small_frame()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["time"], 2.5);
        assert_eq!(value["config"]["background"], "#0E1117");
        assert_eq!(value["primitives"][1]["geometry"]["type"], "LineLoop");

        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, small_frame());
    }
}
