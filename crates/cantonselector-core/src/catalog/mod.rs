//! Canton catalog: geometry loaded from the bundled SVG and grouped
//! into selectable regions.

mod canton;
mod region;

pub use canton::Canton;
pub use region::{Region, RegionId, RegionMode, RegionName, SKI_REGIONS, group_into_regions};

use std::collections::HashMap;
use std::path::Path;

use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use thiserror::Error;

/// The bundled canton map, authored on the 1100×675 selector artboard.
pub const BUNDLED_CANTONS_SVG: &str = include_str!("../../assets/cantons.svg");

/// Errors raised while loading the canton geometry asset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed SVG document: {0}")]
    Xml(String),
    #[error("Expected {expected} canton paths, found {found}")]
    PathCount { expected: usize, found: usize },
    #[error("Path #{index} has no `{attribute}` attribute")]
    MissingAttribute { index: usize, attribute: &'static str },
    #[error("Unknown canton code: {0}")]
    UnknownCanton(String),
    #[error("Canton {0} appears more than once")]
    DuplicateCanton(String),
    #[error("Invalid path geometry for {canton}: {message}")]
    Geometry { canton: String, message: String },
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Geometry of a single canton.
#[derive(Debug, Clone)]
pub struct CantonShape {
    pub canton: Canton,
    /// Raw `d` attribute as found in the asset.
    pub path_data: String,
    pub path: BezPath,
}

impl CantonShape {
    pub fn code(&self) -> &'static str {
        self.canton.code()
    }

    pub fn display_name(&self) -> &'static str {
        self.canton.name()
    }

    pub fn bounds(&self) -> Rect {
        self.path.bounding_box()
    }

    /// Whether `point` (artboard coordinates) lies inside the outline.
    pub fn contains(&self, point: Point) -> bool {
        self.path.contains(point)
    }
}

/// Parse the canton paths out of an SVG document.
///
/// Every `<path>` element must carry a `d` attribute and an `id` holding
/// the canton short code. Exactly [`Canton::COUNT`] distinct cantons are
/// required; anything else means the asset changed and is reported.
pub fn load_cantons(svg: &str) -> CatalogResult<Vec<CantonShape>> {
    let document = roxmltree::Document::parse(svg).map_err(|e| CatalogError::Xml(e.to_string()))?;

    let paths: Vec<roxmltree::Node> = document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "path")
        .collect();

    if paths.len() != Canton::COUNT {
        return Err(CatalogError::PathCount {
            expected: Canton::COUNT,
            found: paths.len(),
        });
    }

    let mut shapes: Vec<CantonShape> = Vec::with_capacity(paths.len());
    for (index, node) in paths.iter().enumerate() {
        let code = node
            .attribute("id")
            .ok_or(CatalogError::MissingAttribute { index, attribute: "id" })?;
        let path_data = node
            .attribute("d")
            .ok_or(CatalogError::MissingAttribute { index, attribute: "d" })?;

        let canton = Canton::from_code(code.trim())
            .ok_or_else(|| CatalogError::UnknownCanton(code.to_string()))?;
        if shapes.iter().any(|s| s.canton == canton) {
            return Err(CatalogError::DuplicateCanton(code.to_string()));
        }

        let path = BezPath::from_svg(path_data).map_err(|e| CatalogError::Geometry {
            canton: code.to_string(),
            message: e.to_string(),
        })?;

        shapes.push(CantonShape {
            canton,
            path_data: path_data.to_string(),
            path,
        });
    }

    Ok(shapes)
}

/// Static catalog of canton geometry and the region grouping over it.
///
/// Built once and handed to the controls; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RegionMap {
    mode: RegionMode,
    cantons: HashMap<Canton, CantonShape>,
    regions: Vec<Region>,
    index: HashMap<RegionId, usize>,
}

impl RegionMap {
    /// Load the bundled asset.
    pub fn bundled(mode: RegionMode) -> CatalogResult<Self> {
        Self::from_svg(BUNDLED_CANTONS_SVG, mode)
    }

    /// Load from SVG text.
    pub fn from_svg(svg: &str, mode: RegionMode) -> CatalogResult<Self> {
        let shapes = load_cantons(svg)?;
        let map = Self::from_shapes(shapes, mode);
        log::info!(
            "Loaded {} cantons into {} regions ({:?} mode)",
            map.cantons.len(),
            map.regions.len(),
            mode
        );
        Ok(map)
    }

    /// Load from an SVG file on disk.
    pub fn from_file(path: &Path, mode: RegionMode) -> CatalogResult<Self> {
        let svg = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_svg(&svg, mode)
    }

    fn from_shapes(shapes: Vec<CantonShape>, mode: RegionMode) -> Self {
        let cantons: HashMap<Canton, CantonShape> =
            shapes.into_iter().map(|shape| (shape.canton, shape)).collect();
        let regions = group_into_regions(mode);
        let index = regions
            .iter()
            .enumerate()
            .map(|(i, region)| (region.id().clone(), i))
            .collect();
        Self {
            mode,
            cantons,
            regions,
            index,
        }
    }

    pub fn mode(&self) -> RegionMode {
        self.mode
    }

    /// All regions in display order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: &RegionId) -> Option<&Region> {
        self.index.get(id).map(|&i| &self.regions[i])
    }

    pub fn contains(&self, id: &RegionId) -> bool {
        self.index.contains_key(id)
    }

    /// Display label of a region.
    pub fn label(&self, id: &RegionId) -> Option<&str> {
        self.region(id).map(Region::display_name)
    }

    /// The region a canton belongs to.
    pub fn region_of(&self, canton: Canton) -> Option<&Region> {
        self.regions.iter().find(|r| r.contains(canton))
    }

    pub fn canton(&self, canton: Canton) -> Option<&CantonShape> {
        self.cantons.get(&canton)
    }

    /// Canton geometry of a region, in member order.
    pub fn shapes_of<'a>(&'a self, region: &'a Region) -> impl Iterator<Item = &'a CantonShape> + 'a {
        region.members.iter().filter_map(|c| self.cantons.get(c))
    }

    /// Region under `point` (artboard coordinates), if any.
    pub fn hit_test(&self, point: Point) -> Option<&RegionId> {
        self.regions
            .iter()
            .find(|region| self.shapes_of(region).any(|shape| shape.contains(point)))
            .map(Region::id)
    }

    /// Bounding box of every canton together.
    pub fn bounds(&self) -> Rect {
        self.cantons
            .values()
            .map(CantonShape::bounds)
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Hexagon tile centers in the bundled asset.
    const GR_CENTER: Point = Point::new(944.4, 427.5);
    const TI_CENTER: Point = Point::new(684.6, 517.5);
    const ZH_CENTER: Point = Point::new(632.6, 247.5);

    fn svg_with(paths: &[(&str, &str)]) -> String {
        let mut svg = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg">"#);
        for (id, d) in paths {
            svg.push_str(&format!(r#"<path d="{d}" id="{id}"/>"#));
        }
        svg.push_str("</svg>");
        svg
    }

    fn square(i: usize) -> String {
        let x = (i * 20) as f64;
        format!("M{x},0 L{},0 L{},10 L{x},10 Z", x + 10.0, x + 10.0)
    }

    fn all_cantons_svg() -> String {
        let squares: Vec<String> = (0..Canton::COUNT).map(square).collect();
        let paths: Vec<(&str, &str)> = Canton::ALL
            .iter()
            .zip(&squares)
            .map(|(c, d)| (c.code(), d.as_str()))
            .collect();
        svg_with(&paths)
    }

    #[test]
    fn test_bundled_asset_has_all_cantons() {
        let shapes = load_cantons(BUNDLED_CANTONS_SVG).unwrap();
        assert_eq!(shapes.len(), Canton::COUNT);
        let mut codes: Vec<_> = shapes.iter().map(|s| s.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), Canton::COUNT);
    }

    #[test]
    fn test_bundled_asset_fits_selector_artboard() {
        let map = RegionMap::bundled(RegionMode::Flat).unwrap();
        let bounds = map.bounds();
        assert!(bounds.x0 >= 0.0 && bounds.y0 >= 0.0);
        assert!(bounds.x1 <= 1100.0 && bounds.y1 <= 675.0);
    }

    #[test]
    fn test_synthetic_document_loads() {
        let shapes = load_cantons(&all_cantons_svg()).unwrap();
        assert_eq!(shapes[0].canton, Canton::ZH);
        assert!(shapes[0].contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_missing_path_is_reported() {
        let squares: Vec<String> = (0..Canton::COUNT - 1).map(square).collect();
        let paths: Vec<(&str, &str)> = Canton::ALL
            .iter()
            .zip(&squares)
            .map(|(c, d)| (c.code(), d.as_str()))
            .collect();
        match load_cantons(&svg_with(&paths)) {
            Err(CatalogError::PathCount { expected, found }) => {
                assert_eq!(expected, 26);
                assert_eq!(found, 25);
            }
            Ok(_) => panic!("truncated document should be rejected"),
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_extra_path_is_reported() {
        let svg = all_cantons_svg().replace("</svg>", r#"<path d="M0,0 L1,1" id="XX"/></svg>"#);
        assert!(matches!(
            load_cantons(&svg),
            Err(CatalogError::PathCount { found: 27, .. })
        ));
    }

    #[test]
    fn test_unknown_and_duplicate_codes() {
        let unknown = all_cantons_svg().replace(r#"id="JU""#, r#"id="XX""#);
        assert!(matches!(load_cantons(&unknown), Err(CatalogError::UnknownCanton(code)) if code == "XX"));

        let duplicate = all_cantons_svg().replace(r#"id="JU""#, r#"id="ZH""#);
        assert!(matches!(load_cantons(&duplicate), Err(CatalogError::DuplicateCanton(code)) if code == "ZH"));
    }

    #[test]
    fn test_missing_attribute() {
        let svg = all_cantons_svg().replace(r#" id="BE""#, "");
        assert!(matches!(
            load_cantons(&svg),
            Err(CatalogError::MissingAttribute { index: 1, attribute: "id" })
        ));
    }

    #[test]
    fn test_bad_geometry_and_xml() {
        let svg = all_cantons_svg().replacen(&square(0), "M0,0 Q", 1);
        assert!(matches!(load_cantons(&svg), Err(CatalogError::Geometry { canton, .. }) if canton == "ZH"));
        assert!(matches!(load_cantons("<svg><path"), Err(CatalogError::Xml(_))));
    }

    #[test]
    fn test_from_file_and_missing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(all_cantons_svg().as_bytes()).unwrap();
        let map = RegionMap::from_file(file.path(), RegionMode::Grouped).unwrap();
        assert_eq!(map.mode(), RegionMode::Grouped);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            RegionMap::from_file(&missing, RegionMode::Flat),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn test_hit_test_flat_mode() {
        let map = RegionMap::bundled(RegionMode::Flat).unwrap();
        assert_eq!(map.hit_test(GR_CENTER), Some(&RegionId::new("GR")));
        assert_eq!(map.hit_test(TI_CENTER), Some(&RegionId::new("TI")));
        assert_eq!(map.hit_test(ZH_CENTER), Some(&RegionId::new("ZH")));
        assert_eq!(map.hit_test(Point::new(20.0, 20.0)), None);
    }

    #[test]
    fn test_hit_test_grouped_mode() {
        let map = RegionMap::bundled(RegionMode::Grouped).unwrap();
        let lucerne = map.canton(Canton::LU).unwrap().bounds().center();
        assert_eq!(map.hit_test(lucerne), Some(&RegionId::new("ZS")));
        assert_eq!(map.label(&RegionId::new("ZS")), Some("Zentralschweiz"));
        assert_eq!(map.region_of(Canton::GL).unwrap().id().as_str(), "OS");
    }

    #[test]
    fn test_lookup_by_id_not_label() {
        let map = RegionMap::bundled(RegionMode::Flat).unwrap();
        assert!(map.contains(&RegionId::new("GR")));
        assert!(!map.contains(&RegionId::new("Graubünden")));
        let shapes: Vec<_> = map
            .shapes_of(map.region(&RegionId::new("GR")).unwrap())
            .map(|s| s.canton)
            .collect();
        assert_eq!(shapes, vec![Canton::GR]);
    }
}
