use crate::models::{NearbyShelter, Shelter};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate kilometers per degree of latitude
const KM_PER_DEGREE: f64 = 111.0;

/// Latitude/longitude box used to cheaply discard far-away shelters
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Box enclosing a circle of `radius_km` around a center point
    pub fn around(lat: f64, lon: f64, radius_km: f64) -> Self {
        let lat_delta = radius_km / KM_PER_DEGREE;
        // Longitude degrees shrink towards the poles
        let lon_delta = radius_km / (KM_PER_DEGREE * lat.to_radians().cos().abs());

        Self {
            min_lat: lat - lat_delta,
            max_lat: lat + lat_delta,
            min_lon: lon - lon_delta,
            max_lon: lon + lon_delta,
        }
    }

    /// Whether a point lies in the box
    ///
    /// Longitude bounds past ±180° wrap around the antimeridian. A box that
    /// reaches a pole or spans the whole globe does not constrain longitude.
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        if lat < self.min_lat || lat > self.max_lat {
            return false;
        }

        let reaches_pole = self.min_lat <= -90.0 || self.max_lat >= 90.0;
        if reaches_pole || self.max_lon - self.min_lon >= 360.0 {
            return true;
        }

        if self.min_lon < -180.0 {
            lon >= self.min_lon + 360.0 || lon <= self.max_lon
        } else if self.max_lon > 180.0 {
            lon >= self.min_lon || lon <= self.max_lon - 360.0
        } else {
            lon >= self.min_lon && lon <= self.max_lon
        }
    }
}

/// Great-circle distance between two points in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Shelters within `radius_km` of the origin, nearest first
pub fn nearby_shelters(
    shelters: Vec<Shelter>,
    lat: f64,
    lon: f64,
    radius_km: f64,
) -> Vec<NearbyShelter> {
    let bbox = BoundingBox::around(lat, lon, radius_km);

    let mut nearby: Vec<NearbyShelter> = shelters
        .into_iter()
        .filter(|s| bbox.contains(s.latitude, s.longitude))
        .filter_map(|shelter| {
            let distance_km = haversine_distance(lat, lon, shelter.latitude, shelter.longitude);
            (distance_km <= radius_km).then_some(NearbyShelter {
                shelter,
                distance_km,
            })
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}
