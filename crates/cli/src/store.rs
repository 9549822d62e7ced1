//! Geometry store: GeoJSON feature collections of polygon layers.
//!
//! Only `Polygon` and `MultiPolygon` geometries are accepted. Feature `id`
//! and `properties`, and the collection's other members (`crs`, `name`, ...),
//! ride along untouched so a run only replaces geometry.

use anyhow::{bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use polyscatter::geom::Shape;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

type Ring = Vec<[f64; 2]>;

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type", content = "coordinates")]
enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

#[derive(Debug, Deserialize, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    #[serde(default)]
    properties: Value,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize, Serialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<Feature>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// A polygon layer: shapes plus per-feature ids and attributes, index-aligned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    pub shapes: Vec<Shape>,
    pub ids: Vec<Option<Value>>,
    pub properties: Vec<Value>,
    /// Collection-level members other than `type` and `features`.
    pub extra: Map<String, Value>,
}

impl Layer {
    /// Replace geometry, keep attributes. Lengths must match.
    pub fn with_shapes(self, shapes: Vec<Shape>) -> Result<Self> {
        if shapes.len() != self.properties.len() {
            bail!(
                "layer has {} features but {} shapes were given",
                self.properties.len(),
                shapes.len()
            );
        }
        Ok(Self { shapes, ..self })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

pub fn read_layer(path: &Path) -> Result<Layer> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let fc: FeatureCollection = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing GeoJSON {}", path.display()))?;
    if fc.kind != "FeatureCollection" {
        bail!("{}: expected a FeatureCollection, got {}", path.display(), fc.kind);
    }
    let mut layer = Layer {
        extra: fc.extra,
        ..Layer::default()
    };
    for (i, f) in fc.features.into_iter().enumerate() {
        let geometry = f
            .geometry
            .with_context(|| format!("{}: feature {i} has no geometry", path.display()))?;
        layer.shapes.push(to_shape(geometry));
        layer.ids.push(f.id);
        layer.properties.push(f.properties);
    }
    Ok(layer)
}

/// Write `layer`, replacing any existing file and creating parent dirs.
pub fn write_layer(path: &Path, layer: &Layer) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let fc = FeatureCollection {
        kind: "FeatureCollection".to_string(),
        features: layer
            .shapes
            .iter()
            .zip(&layer.ids)
            .zip(&layer.properties)
            .map(|((s, id), p)| Feature {
                kind: "Feature".to_string(),
                id: id.clone(),
                properties: p.clone(),
                geometry: Some(from_shape(s)),
            })
            .collect(),
        extra: layer.extra.clone(),
    };
    fs::write(path, serde_json::to_vec(&fc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn to_ring(ring: Ring) -> LineString<f64> {
    LineString::new(ring.into_iter().map(|[x, y]| Coord { x, y }).collect())
}

fn to_polygon(rings: Vec<Ring>) -> Polygon<f64> {
    let mut rings = rings.into_iter().map(to_ring);
    let exterior = rings.next().unwrap_or_else(|| LineString::new(vec![]));
    Polygon::new(exterior, rings.collect())
}

fn to_shape(g: Geometry) -> Shape {
    match g {
        Geometry::Polygon(rings) => Shape::Single(to_polygon(rings)),
        Geometry::MultiPolygon(polys) => {
            Shape::Multi(MultiPolygon::new(polys.into_iter().map(to_polygon).collect()))
        }
    }
}

fn from_polygon(p: &Polygon<f64>) -> Vec<Ring> {
    std::iter::once(p.exterior())
        .chain(p.interiors())
        .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
        .collect()
}

fn from_shape(s: &Shape) -> Geometry {
    match s {
        Shape::Single(p) => Geometry::Polygon(from_polygon(p)),
        Shape::Multi(mp) => Geometry::MultiPolygon(mp.iter().map(from_polygon).collect()),
    }
}
