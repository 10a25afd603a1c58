use anyhow::{anyhow, Context, Result};
use serde_json::Value;

/// One GeoJSON feature. The raw geometry stays opaque; only the region
/// name is lifted out as the dataset join key.
#[derive(Debug, Clone)]
pub struct RegionFeature {
    pub name: String,
    pub geometry: Value,
}

/// Parsed GADM level-1 FeatureCollection for Bhutan. Immutable for the
/// whole session once loaded.
#[derive(Debug, Clone)]
pub struct RegionCollection {
    features: Vec<RegionFeature>,
}

impl RegionCollection {
    /// Parse a FeatureCollection, extracting the `NAME_1` property of
    /// every feature as its region name.
    pub fn from_geojson(bytes: &[u8]) -> Result<Self> {
        let root: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON")?;
        let features = root
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| anyhow!("[from_geojson] Missing features array"))?;

        let mut out = Vec::with_capacity(features.len());
        for feature in features {
            let name = feature
                .pointer("/properties/NAME_1")
                .and_then(Value::as_str)
                .ok_or_else(|| anyhow!("[from_geojson] Feature without NAME_1 property"))?
                .to_string();
            let geometry = feature.get("geometry").cloned().unwrap_or(Value::Null);
            out.push(RegionFeature { name, geometry });
        }
        Ok(Self { features: out })
    }

    pub fn features(&self) -> &[RegionFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> &'static str {
        r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "NAME_1": "Thimphu", "GID_1": "BTN.15_1" },
                    "geometry": { "type": "Polygon", "coordinates": [[[89.0,27.0],[89.5,27.0],[89.5,27.5],[89.0,27.0]]] }
                },
                {
                    "type": "Feature",
                    "properties": { "NAME_1": "Paro" },
                    "geometry": null
                }
            ]
        }"#
    }

    #[test]
    fn extracts_region_names() {
        let regions = RegionCollection::from_geojson(collection().as_bytes()).unwrap();
        let names: Vec<&str> = regions.features().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Thimphu", "Paro"]);
    }

    #[test]
    fn keeps_geometry_opaque() {
        let regions = RegionCollection::from_geojson(collection().as_bytes()).unwrap();
        assert_eq!(regions.features()[0].geometry["type"], "Polygon");
        assert!(regions.features()[1].geometry.is_null());
    }

    #[test]
    fn rejects_collection_without_features() {
        assert!(RegionCollection::from_geojson(br#"{ "type": "FeatureCollection" }"#).is_err());
    }

    #[test]
    fn rejects_feature_without_name() {
        let missing = br#"{ "features": [ { "properties": {}, "geometry": null } ] }"#;
        assert!(RegionCollection::from_geojson(missing).is_err());
    }
}
