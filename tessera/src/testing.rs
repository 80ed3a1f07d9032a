//! Small TrueType fonts built in memory for tests.

use write_fonts::read::tables::glyf::CurvePoint;
use write_fonts::{
    tables::{
        cmap::Cmap,
        glyf::{
            Anchor, Bbox, Component, ComponentFlags, CompositeGlyph, Contour,
            GlyfLocaBuilder, SimpleGlyph, Transform,
        },
        head::Head,
        hhea::Hhea,
        hmtx::{Hmtx, LongMetric},
        maxp::Maxp,
    },
    types::{GlyphId, GlyphId16},
    FontBuilder,
};

/// Glyph with no outline.
pub const EMPTY_GID: u32 = 0;
/// Simple glyph, mapped from 'a'.
pub const SIMPLE_GID: u32 = 1;
/// Composite of the simple glyph shifted by [`COMPOSITE_OFFSET`], mapped
/// from 'b'.
pub const COMPOSITE_GID: u32 = 2;
pub const COMPOSITE_OFFSET: i16 = 200;
pub const NUM_GLYPHS: u16 = 3;

/// Points of the simple glyph as `(x, y, on_curve)`, one slice per contour.
///
/// The first contour has two consecutive off-curve points with an implied
/// on-curve point at (50, 100) between them.
pub const SIMPLE_CONTOURS: &[&[(i16, i16, bool)]] = &[
    &[
        (0, 0, true),
        (0, 100, false),
        (100, 100, false),
        (100, 0, true),
    ],
    &[(20, 20, true), (80, 20, true), (50, 60, true)],
];

fn simple_glyph() -> SimpleGlyph {
    let contours = SIMPLE_CONTOURS
        .iter()
        .map(|points| {
            Contour::from(
                points
                    .iter()
                    .map(|&(x, y, on_curve)| {
                        if on_curve {
                            CurvePoint::on_curve(x, y)
                        } else {
                            CurvePoint::off_curve(x, y)
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    SimpleGlyph {
        bbox: Bbox {
            x_min: 0,
            y_min: 0,
            x_max: 100,
            y_max: 100,
        },
        contours,
        instructions: vec![],
    }
}

fn composite_glyph() -> CompositeGlyph {
    let component = Component::new(
        GlyphId16::new(SIMPLE_GID as u16),
        Anchor::Offset {
            x: COMPOSITE_OFFSET,
            y: 0,
        },
        Transform::default(),
        ComponentFlags::default(),
    );
    CompositeGlyph::new(
        component,
        Bbox {
            x_min: COMPOSITE_OFFSET,
            y_min: 0,
            x_max: COMPOSITE_OFFSET + 100,
            y_max: 100,
        },
    )
}

/// Builds a font containing the empty, simple and composite glyphs.
pub fn quadratic_font() -> Vec<u8> {
    let mut glyf_builder = GlyfLocaBuilder::new();
    glyf_builder.add_glyph(&SimpleGlyph::default()).unwrap();
    glyf_builder.add_glyph(&simple_glyph()).unwrap();
    glyf_builder.add_glyph(&composite_glyph()).unwrap();
    let (glyf, loca, loca_format) = glyf_builder.build();
    let head = Head {
        units_per_em: 1000,
        index_to_loc_format: loca_format as i16,
        ..Default::default()
    };
    let maxp = Maxp {
        num_glyphs: NUM_GLYPHS,
        ..Default::default()
    };
    let hhea = Hhea {
        number_of_h_metrics: NUM_GLYPHS,
        ..Default::default()
    };
    // Side bearings match each glyph's x_min so the phantom points never
    // shift the outline.
    let hmtx = Hmtx {
        h_metrics: [0, 0, COMPOSITE_OFFSET]
            .into_iter()
            .map(|side_bearing| LongMetric {
                advance: 500,
                side_bearing,
            })
            .collect(),
        left_side_bearings: vec![],
    };
    let cmap = Cmap::from_mappings([
        ('a', GlyphId::new(SIMPLE_GID)),
        ('b', GlyphId::new(COMPOSITE_GID)),
    ])
    .unwrap();
    let mut builder = FontBuilder::new();
    builder
        .add_table(&head)
        .unwrap()
        .add_table(&maxp)
        .unwrap()
        .add_table(&hhea)
        .unwrap()
        .add_table(&hmtx)
        .unwrap()
        .add_table(&cmap)
        .unwrap()
        .add_table(&glyf)
        .unwrap()
        .add_table(&loca)
        .unwrap();
    builder.build()
}
