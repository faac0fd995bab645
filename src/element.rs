//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Jade.
//! The Jade project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Element Preset Module
//!
//! The bundled visualization presets: each element is a manifest entry
//! carrying an expression pipeline that builds a chart document with `json`,
//! fills it from query results with repeated `enrich` steps, and hands it to
//! the plotly renderer. The embedded documents are written in the relaxed
//! dialect [`crate::relaxed`] parses.

use serde::{Deserialize, Serialize};

/// Manifest entry for one preset element.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JadeElement {
    pub name: String,
    pub display_name: String,
    pub help: String,
    pub width: u32,
    pub height: u32,
    pub expression: String,
}

/// Base chart document of the parallel-coordinates preset.
pub(crate) const PARCOORDS_DOCUMENT: &str = "{
    layout: {title: 'Parallel Coordinates Example'},
    data: [ {
      type: 'parcoords',
      line: { showscale: true, reversescale: true, colorscale: 'Jet', color: [] }
      dimensions: []
    } ]
  }";

/// Base chart document of the 3D scatter preset.
pub(crate) const THREED_DOCUMENT: &str = "{
    layout: {
      title: 'Exploration wells'
      scene: {
        xaxis: {title: 'lat'},
        yaxis: {title: 'lon'},
        zaxis: {title: 'depth'},
        aspectmode: 'cube',
        camera: {
          up: {x: 0, y: 0, z: 1},
          center: {x: 0, y: 0, z: 0},
          eye: {x: 1.5, y: 1.5, z: 1.5},
        }
      },
      margin: {t: 65, b: 0, l: 0, r: 0},
      width: 500,
      height: 500
    },
    data: [
      {
        type: 'scatter3d',
        hoverinfo: 'x+y+text',
        mode: 'markers+lines',
        marker: { colorscale: 'Viridis', reversescale: true, size: 3, color: [] },
        line: {width: 2, color: 'green'},
        transforms: [{
          type: 'groupby',
          groups:[],
          styles: [
            {target: '15_9-F-1 A', value: {mode: 'markers', line: {color: 'red'}, marker: {color: 'red'}}},
            {target: '15_9-F-1 B', value: {mode: 'lines', line: {color: 'blue'}, marker: {color: 'blue'}}},
            # {target: '15_9-F-1 C', value: {mode: 'markers+lines', line: {color: 'green'}, marker: {color: 'green'}}},
            {target: '15_9-F-1', value: {line: {color: 'purple'}, marker: {color: 'magenta'}}}
          ]
        }],
        x: [],
        y: [],
        z: [],
        text: []
      },
      {
        type: 'scatter3d',
        mode: 'text',
        text: ['Platform', '<b>Best<br>drill</b>'],
        showlegend: false,
        x: [58.443, 58.451],
        y: [1.8875, 1.885],
        z: [30, -4600]
      },
      {
        type: 'surface',
        showscale: false,
        colorscale: 'Blues',
        opacity: 0.6,
         x: [58.441, 58.445],
         y: [1.885, 1.89],
         z: [[-100,-100], [-100, -100]]
      }
     ]
  }";

/// Base chart document of the streamgraph preset.
pub(crate) const STREAMGRAPH_DOCUMENT: &str = "{
    layout: {
      title: 'Exploration wells'
      scene: {
        xaxis: {title: 'lat'},
        yaxis: {title: 'lon'},
        zaxis: {title: 'depth'},

        camera: {
          up: {x: 0, y: 0, z: 1},
          center: {x: 0, y: 0, z: 0},
          eye: {x: 1.5, y: 1.5, z: 1.5},
        }
      },
      margin: {t: 65, b: 0, l: 0, r: 0},
      width: 500,
      height: 500
    },
    data: [
      {
        type: 'streamtube',
        x: [],
        y: [],
        z: [],
        u: [],
        v: [],
        w: []
      }
     ]
  }";

/// Base chart document of the 2D scatter preset.
pub(crate) const SCATTER_DOCUMENT: &str = "{
    layout: {
        title: 'Flight time vs. distance (with flight delay)',
        xaxis: { title: { text: 'Flight time' }, hoverformat: ',.0f', ticksuffix: 'hrs', showticksuffix: 'all', domain: [0, 0.65] },
        xaxis2: { title: { text: 'Mean distance and delay by destination' }, hoverformat: ',.0f', showticksuffix: 'all', domain: [0.66, 0.95] },
        yaxis: { title: { text: 'Distance' }, hoverformat: ',.0f', tickprefix: ' ', ticksuffix: ' mil.', showticksuffix: 'last', domain: [0.5, 1]  },
        hovermode: 'closest',
        showlegend: false,
        bargap: 0.382
      },
    data: [
      {
        type: 'scatter',
        hoverinfo: 'x+y+text',
        mode: 'markers',
        marker: { colorscale: 'Viridis',
                  reversescale: true, showscale: true, colorbar: { title: 'Delay<br>(mins)', thickness: 12 }, color: [], size: [], sizemode: 'radius', sizemin: 1, opacity: 0.5, line: { width: 0 } },
        xaxis: 'x',
        yaxis: 'y',
        x: [],
        y: [],
        text: []
      },
      {
        type: 'scatter',
        mode: 'lines',
        line: { width: 4, color: 'tomato' },
        xaxis: 'x',
        yaxis: 'y',
        x: [],
        y: []
      },
      {
        type: 'bar',
        xaxis: 'x2',
        yaxis: 'y',
        x: [],
        y: [],
        marker: { color: [], colorscale: 'Viridis',
                  reversescale: true }
      }
     ]
  }";

fn parcoords() -> JadeElement {
    JadeElement {
        name: "plotly_parcoords".to_string(),
        display_name: "A-Parcoords".to_string(),
        help: "Plotly Parallel Coordinates".to_string(),
        width: 600,
        height: 384,
        expression: [
            "filters\n| json \"",
            PARCOORDS_DOCUMENT,
            "\"\n",
            r#"| enrich table={filters | essql "SELECT DistanceMiles, AvgTicketPrice FROM kibana_sample_data_flights LIMIT 1"}
         path="data[0].dimensions"
         value="{label: '{{column}}', values: []}"
| enrich table={filters | essql "SELECT DistanceMiles FROM kibana_sample_data_flights"}
         path="data[0].line.color"
         value="{{value}}"
| enrich table={filters | essql "SELECT DistanceMiles, AvgTicketPrice FROM kibana_sample_data_flights"}
         path="data[0].dimensions[?(@.label==='{{column}}')].values"
         value="{{value}}"
| render as=plotly"#,
        ]
        .concat(),
    }
}

fn threed() -> JadeElement {
    JadeElement {
        name: "plotly_threed".to_string(),
        display_name: "A-scatter3d".to_string(),
        help: "Plotly 3D Scatterplot".to_string(),
        width: 500,
        height: 500,
        expression: [
            "filters\n| json \"",
            THREED_DOCUMENT,
            "\"\n",
            r#"| enrich table={filters | essql "select survey.location.lat as lat from wellbore_data order by well.wellbore.name, survey.depth"}
         path="data[0].x"
| enrich table={filters | essql "select survey.location.lon as lon from wellbore_data order by well.wellbore.name, survey.depth"}
         path="data[0].y"
| enrich table={filters | essql "select -survey.depth as depth from wellbore_data order by well.wellbore.name, survey.depth"}
         path="data[0].z"
| enrich table={filters | essql "select -survey.depth as depth from wellbore_data order by well.wellbore.name, survey.depth"}
         path="data[0].marker.color"
| enrich table={filters | essql "select well.wellbore.name as name from wellbore_data order by well.wellbore.name, survey.depth"}
         path="data[0].transforms[0].groups"
| render as=plotly"#,
        ]
        .concat(),
    }
}

fn streamgraph() -> JadeElement {
    JadeElement {
        name: "plotly_streamgraph".to_string(),
        display_name: "A-streamgraph".to_string(),
        help: "Plotly 3D Streamgraph".to_string(),
        width: 500,
        height: 500,
        expression: [
            "filters\n| json \"",
            STREAMGRAPH_DOCUMENT,
            "\"\n",
            r#"| enrich table={filters | essql "select (survey.location.lat - 58.4475) * 200 as lat from wellbore_data"}
         path="data[0].x"
| enrich table={filters | essql "select (survey.location.lon - 1.89) * 100 as lon from wellbore_data"}
         path="data[0].y"
| enrich table={filters | essql "select (2000 - survey.depth) / 2000 as depth from wellbore_data"}
         path="data[0].z"
| enrich table={filters | essql "select 1 as u from wellbore_data"}
         path="data[0].u"
| enrich table={filters | essql "select 0.1 as v from wellbore_data"}
         path="data[0].v"
| enrich table={filters | essql "select 1 as w from wellbore_data"}
         path="data[0].w"
| render as=plotly"#,
        ]
        .concat(),
    }
}

fn scatter() -> JadeElement {
    JadeElement {
        name: "plotly_scatter".to_string(),
        display_name: "A-Scatter".to_string(),
        help: "Plotly Scatterplot".to_string(),
        width: 960,
        height: 600,
        expression: [
            "filters\n| json \"",
            SCATTER_DOCUMENT,
            "\"\n",
            r#"| enrich table={filters | essql "SELECT FlightTimeHour FROM kibana_sample_data_flights WHERE FlightDelayMin > 0 ORDER BY FlightDelayMin"}
         path="data[0].x"
| enrich table={filters | essql "SELECT DistanceMiles  FROM kibana_sample_data_flights WHERE FlightDelayMin > 0 ORDER BY FlightDelayMin"}
         path="data[0].y"
| enrich table={filters | essql "SELECT FlightDelayMin FROM kibana_sample_data_flights WHERE FlightDelayMin > 0 ORDER BY FlightDelayMin"}
         path="data[0].marker.color"
| enrich table={filters | essql "SELECT AvgTicketPrice / 150 as ratio FROM kibana_sample_data_flights WHERE FlightDelayMin > 0 ORDER BY FlightDelayMin"}
         path="data[0].marker.size"
| enrich table={filters | essql "SELECT CONCAT(CONCAT('🛫 ', OriginCityName), CONCAT('<br>🛬 ', DestCityName)) as Relation FROM kibana_sample_data_flights WHERE FlightDelayMin > 0 ORDER BY FlightDelayMin"}
         path="data[0].text"
| enrich table={filters | essql "SELECT ROUND(CONVERT(FlightTimeHour, SQL_FLOAT)) as ftime FROM kibana_sample_data_flights WHERE FlightDelayMin > 0 GROUP BY ftime"}
         path="data[1].x"
| enrich table={filters | essql "SELECT AVG(DistanceMiles) as dist, ROUND(CONVERT(FlightTimeHour, SQL_FLOAT)) as ftime FROM kibana_sample_data_flights WHERE FlightDelayMin > 0 GROUP BY ftime"}
         columns="dist"
         path="data[1].y"
| enrich table={filters | essql "SELECT AVG(DistanceMiles) as dist, DestCountry FROM kibana_sample_data_flights GROUP BY DestCountry ORDER BY DestCountry"}
         columns="DestCountry"
         path="data[2].x"
| enrich table={filters | essql "SELECT AVG(DistanceMiles) as dist, DestCountry FROM kibana_sample_data_flights GROUP BY DestCountry ORDER BY DestCountry"}
         columns="dist"
         path="data[2].y"
| enrich table={filters | essql "SELECT AVG(FlightDelayMin) as delay, DestCountry FROM kibana_sample_data_flights GROUP BY DestCountry ORDER BY DestCountry"}
         columns="delay"
         path="data[2].marker.color"
| render as=plotly"#,
        ]
        .concat(),
    }
}

/// The bundled preset elements, in registration order.
#[allow(non_snake_case)]
pub fn builtin_elements() -> Vec<JadeElement> {
    vec![parcoords(), scatter(), threed(), streamgraph()]
}
