use crate::core::map::MapReport;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// GeoJSON FeatureCollection, one Point feature per marker.
/// Coordinates follow GeoJSON order: `[lon, lat]`.
pub fn to_geojson(report: &MapReport) -> Value {
    let features: Vec<Value> = report
        .markers
        .iter()
        .map(|m| {
            json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [m.lon, m.lat] },
                "properties": { "id": m.event_id, "label": m.label },
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

/// Self-contained Leaflet page: OSM tiles, one popup marker per event.
pub fn to_html(report: &MapReport, title: &str) -> AppResult<String> {
    let (lat, lon) = report.options.center;
    // "</" would close the script element early
    let markers = serde_json::to_string(&report.markers)?.replace("</", "<\\/");
    let title_json = serde_json::to_string(title)?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title_html}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
document.title = {title_json};
const map = L.map('map').setView([{lat}, {lon}], {zoom});
L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
  attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
const markers = {markers};
for (const m of markers) {{
  const popup = document.createElement('span');
  popup.textContent = m.label;
  L.marker([m.lat, m.lon]).bindPopup(popup).addTo(map);
}}
</script>
</body>
</html>
"#,
        title_html = escape_html(title),
        zoom = report.options.zoom,
    ))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub(crate) fn export_geojson(report: &MapReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting map to GeoJSON: {}", path.display()));
    fs::write(path, serde_json::to_string_pretty(&to_geojson(report))?)?;
    notify_export_success("GeoJSON", path);
    Ok(())
}

pub(crate) fn export_html(report: &MapReport, path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting map to HTML: {}", path.display()));
    fs::write(path, to_html(report, title)?)?;
    notify_export_success("HTML map", path);
    Ok(())
}
