// ---------------------------------------------------------------------------
// Static river-location table
// ---------------------------------------------------------------------------

/// A river sampling location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct River {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// All recorded rivers for one state, in display order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRivers {
    pub state: &'static str,
    pub rivers: &'static [River],
}

/// A geographic point (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl StateRivers {
    /// River names in table order.
    pub fn river_names(&self) -> Vec<&'static str> {
        self.rivers.iter().map(|r| r.name).collect()
    }

    /// Arithmetic mean of the river coordinates.
    ///
    /// `None` when the state has no rivers.
    pub fn center(&self) -> Option<LatLon> {
        if self.rivers.is_empty() {
            return None;
        }
        let n = self.rivers.len() as f64;
        let lat = self.rivers.iter().map(|r| r.lat).sum::<f64>() / n;
        let lon = self.rivers.iter().map(|r| r.lon).sum::<f64>() / n;
        Some(LatLon { lat, lon })
    }
}

const fn river(name: &'static str, lat: f64, lon: f64) -> River {
    River { name, lat, lon }
}

/// Every state in the table, in selection order.
pub static STATE_RIVERS: &[StateRivers] = &[
    StateRivers {
        state: "Andhra Pradesh",
        rivers: &[river("Godavari", 17.0166, 81.8040), river("Krishna", 16.5728, 80.3575)],
    },
    StateRivers {
        state: "Telangana",
        rivers: &[river("Krishna", 17.1232, 79.2085), river("Manjira", 18.0110, 77.8782)],
    },
    StateRivers {
        state: "Maharashtra",
        rivers: &[river("Godavari", 19.8762, 75.3433), river("Bhima", 18.5204, 73.8567)],
    },
    StateRivers {
        state: "Karnataka",
        rivers: &[river("Cauvery", 12.2958, 76.6394), river("Tungabhadra", 15.1495, 76.9155)],
    },
    StateRivers {
        state: "Tamil Nadu",
        rivers: &[river("Cauvery", 11.1271, 78.6569), river("Vaigai", 9.9252, 78.1198)],
    },
    StateRivers {
        state: "Kerala",
        rivers: &[river("Periyar", 10.8505, 76.2711), river("Bharathapuzha", 10.7452, 76.5004)],
    },
    StateRivers {
        state: "Gujarat",
        rivers: &[river("Narmada", 21.1702, 72.8311), river("Tapi", 21.7645, 72.1519)],
    },
    StateRivers {
        state: "Punjab",
        rivers: &[river("Sutlej", 30.7333, 76.7794), river("Beas", 31.1471, 75.3412)],
    },
    StateRivers {
        state: "Uttar Pradesh",
        rivers: &[river("Ganga", 27.1767, 78.0081), river("Yamuna", 26.8467, 80.9462)],
    },
    StateRivers {
        state: "West Bengal",
        rivers: &[river("Ganga", 22.5726, 88.3639), river("Damodar", 23.6739, 87.6836)],
    },
    StateRivers { state: "Rajasthan", rivers: &[river("Chambal", 26.9124, 75.7873)] },
    StateRivers { state: "Bihar", rivers: &[river("Ganga", 25.0961, 85.3131)] },
    StateRivers { state: "Jharkhand", rivers: &[river("Subarnarekha", 23.6102, 85.2799)] },
    StateRivers { state: "Madhya Pradesh", rivers: &[river("Narmada", 23.2599, 77.4126)] },
    StateRivers { state: "Odisha", rivers: &[river("Mahanadi", 20.9517, 85.0985)] },
    StateRivers { state: "Chhattisgarh", rivers: &[river("Mahanadi", 21.2787, 81.8661)] },
    StateRivers { state: "Assam", rivers: &[river("Brahmaputra", 26.2006, 92.9376)] },
    StateRivers { state: "Meghalaya", rivers: &[river("Umkhrah", 25.5788, 91.8933)] },
    StateRivers { state: "Tripura", rivers: &[river("Gomati", 23.9408, 91.9882)] },
    StateRivers { state: "Manipur", rivers: &[river("Barak", 24.6637, 93.9063)] },
    StateRivers { state: "Nagaland", rivers: &[river("Dikhu", 26.1584, 94.5624)] },
    StateRivers { state: "Mizoram", rivers: &[river("Tlawng", 23.1645, 92.9376)] },
    StateRivers { state: "Himachal Pradesh", rivers: &[river("Beas", 31.1048, 77.1734)] },
    StateRivers { state: "Uttarakhand", rivers: &[river("Ganga", 30.0668, 79.0193)] },
    StateRivers { state: "Goa", rivers: &[river("Mandovi", 15.2993, 74.1240)] },
    StateRivers { state: "Delhi", rivers: &[river("Yamuna", 28.6139, 77.2090)] },
    StateRivers { state: "Haryana", rivers: &[river("Yamuna", 29.0588, 76.0856)] },
    StateRivers { state: "Sikkim", rivers: &[river("Teesta", 27.5330, 88.5122)] },
    StateRivers { state: "Arunachal Pradesh", rivers: &[river("Siang", 28.2170, 94.7278)] },
];

/// State names in selection order.
pub fn state_names() -> impl Iterator<Item = &'static str> {
    STATE_RIVERS.iter().map(|s| s.state)
}

/// Look up a state's rivers by exact name.
pub fn lookup(state: &str) -> Option<&'static StateRivers> {
    STATE_RIVERS.iter().find(|s| s.state == state)
}

// ---------------------------------------------------------------------------
// Map view
// ---------------------------------------------------------------------------

/// Initial zoom level of the river map.
pub const DEFAULT_ZOOM: f64 = 5.0;

/// Initial camera for the river map: a center plus a web-map style zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLon,
    pub zoom: f64,
}

impl MapView {
    /// View centered on a state's rivers, or `None` for an empty state.
    pub fn for_state(state: &StateRivers) -> Option<Self> {
        state.center().map(|center| MapView {
            center,
            zoom: DEFAULT_ZOOM,
        })
    }

    /// Width of the visible window in degrees of longitude.
    ///
    /// Zoom 0 shows the whole 360°, each level halves it.
    pub fn span_degrees(&self) -> f64 {
        360.0 / 2f64.powf(self.zoom)
    }

    /// `(min_lon, max_lon, min_lat, max_lat)` of a square window around the center.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half = self.span_degrees() / 2.0;
        (
            self.center.lon - half,
            self.center.lon + half,
            self.center.lat - half,
            self.center.lat + half,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn table_has_29_unique_states() {
        assert_eq!(STATE_RIVERS.len(), 29);
        let mut names: Vec<_> = state_names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 29);
    }

    #[test]
    fn first_state_is_andhra_pradesh() {
        assert_eq!(state_names().next(), Some("Andhra Pradesh"));
    }

    #[test]
    fn every_state_has_rivers_and_mean_center() {
        for entry in STATE_RIVERS {
            assert!(!entry.rivers.is_empty(), "{} has no rivers", entry.state);
            let center = entry.center().unwrap();
            let n = entry.rivers.len() as f64;
            let lat: f64 = entry.rivers.iter().map(|r| r.lat).sum::<f64>() / n;
            let lon: f64 = entry.rivers.iter().map(|r| r.lon).sum::<f64>() / n;
            assert_eq!(center, LatLon { lat, lon });
        }
    }

    #[test]
    fn kerala_has_two_rivers() {
        let kerala = lookup("Kerala").unwrap();
        assert_eq!(kerala.river_names(), vec!["Periyar", "Bharathapuzha"]);
        let center = kerala.center().unwrap();
        assert!(approx_eq(center.lat, 10.79785));
        assert!(approx_eq(center.lon, 76.38575));
    }

    #[test]
    fn bihar_center_is_its_only_river() {
        let bihar = lookup("Bihar").unwrap();
        assert_eq!(bihar.river_names(), vec!["Ganga"]);
        assert_eq!(
            bihar.center(),
            Some(LatLon {
                lat: 25.0961,
                lon: 85.3131
            })
        );
    }

    #[test]
    fn unknown_state_is_absent() {
        assert!(lookup("Atlantis").is_none());
        assert!(lookup("kerala").is_none());
    }

    #[test]
    fn empty_state_has_no_center() {
        let empty = StateRivers {
            state: "Nowhere",
            rivers: &[],
        };
        assert_eq!(empty.center(), None);
        assert_eq!(MapView::for_state(&empty), None);
    }

    #[test]
    fn map_view_spans_around_center() {
        let view = MapView::for_state(lookup("Bihar").unwrap()).unwrap();
        assert_eq!(view.zoom, DEFAULT_ZOOM);
        assert!(approx_eq(view.span_degrees(), 11.25));
        let (min_lon, max_lon, min_lat, max_lat) = view.bounds();
        assert!(approx_eq((min_lon + max_lon) / 2.0, 85.3131));
        assert!(approx_eq((min_lat + max_lat) / 2.0, 25.0961));
        assert!(approx_eq(max_lon - min_lon, 11.25));
    }
}
