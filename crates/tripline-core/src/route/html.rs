//! Standalone Leaflet page for a [`RouteView`].

use serde_json::json;

use super::RouteView;
use crate::error::Result;

const LEAFLET_VERSION: &str = "1.9.4";

/// Renders the view as a self-contained HTML page.
///
/// Markers show `"<order>. <name>"` on hover and the name on click. Segments
/// are red lines; clicking one opens a popup with its label and a link to the
/// routing service. Tiles come from OpenStreetMap.
pub fn to_html(view: &RouteView, title: &str) -> Result<String> {
    let markers: Vec<_> = view
        .markers
        .iter()
        .map(|marker| {
            json!({
                "position": marker.position.lat_lon(),
                "tooltip": marker.tooltip(),
                "name": marker.name,
            })
        })
        .collect();
    let segments: Vec<_> = view
        .segments
        .iter()
        .map(|segment| {
            json!({
                "path": [segment.from.lat_lon(), segment.to.lat_lon()],
                "label": segment.label(),
                "url": segment.directions_url,
            })
        })
        .collect();
    let data = json!({
        "center": view.center.lat_lon(),
        "zoom": view.zoom,
        "markers": markers,
        "segments": segments,
    });

    // Keep "</script>" inside names from closing the data block.
    let data = serde_json::to_string(&data)?.replace("</", "<\\/");
    let title = escape_html(title);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<link rel="stylesheet" href="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
const route = {data};
const map = L.map("map").setView(route.center, route.zoom);
L.tileLayer("https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
  attribution: "&copy; OpenStreetMap contributors"
}}).addTo(map);
const text = (value) => {{
  const span = document.createElement("span");
  span.textContent = value;
  return span;
}};
for (const marker of route.markers) {{
  L.marker(marker.position)
    .bindTooltip(text(marker.tooltip))
    .bindPopup(text(marker.name))
    .addTo(map);
}}
for (const segment of route.segments) {{
  const popup = document.createElement("div");
  const label = document.createElement("b");
  label.textContent = segment.label;
  const link = document.createElement("a");
  link.href = segment.url;
  link.target = "_blank";
  link.textContent = "Open route";
  popup.append(label, document.createElement("br"), link);
  L.polyline(segment.path, {{ color: "red", weight: 5, opacity: 0.7 }})
    .bindPopup(popup, {{ maxWidth: 300 }})
    .addTo(map);
}}
</script>
</body>
</html>
"#
    ))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
