//! Tree-to-record mapping and the symmetric writer.
//!
//! Keys are matched by linear scan; numeric keys accept a unit suffix which
//! is stripped and applied as a multiplier. Unknown keys are ignored; a value
//! of the wrong kind leaves the field at the sentinel and warns through the
//! debug channel. The writer emits only populated fields, so parse → write →
//! parse is the identity on the populated part of a record.

use std::rc::Rc;

use crate::linalg::{Vec3, Vector};
use crate::mathfuncs::ieee754::{is_no_data, NO_DATA, NO_DATA_UINT};
use crate::scstream::{SCKeyValue, SCSTable};

use super::{CloudLayerParams, CompositionType, Object, UNIT_MULTIPLIERS};

/// A unit-aware scalar: the bare key passes through (values are already SI),
/// suffixed keys are converted.
fn unit_f64(table: &SCSTable, key: &str) -> f64 {
    table
        .get_f64_with_unit(key, 1.0, UNIT_MULTIPLIERS)
        .unwrap_or_else(|| {
            warn_kind(table, key);
            NO_DATA
        })
}

fn plain_f64(table: &SCSTable, key: &str) -> f64 {
    table.get_f64(key).unwrap_or_else(|| {
        warn_kind(table, key);
        NO_DATA
    })
}

fn plain_u64(table: &SCSTable, key: &str) -> u64 {
    table.get_u64(key).unwrap_or_else(|| {
        warn_kind(table, key);
        NO_DATA_UINT
    })
}

fn plain_string(table: &SCSTable, key: &str) -> String {
    table.get_string(key).unwrap_or_default()
}

fn plain_bool(table: &SCSTable, key: &str) -> bool {
    table.get_bool(key).unwrap_or(false)
}

fn plain_vec3(table: &SCSTable, key: &str) -> Vec3 {
    match table.get_array(key, 3) {
        Some(a) => Vector([a[0], a[1], a[2]]),
        None => {
            warn_kind(table, key);
            Vector::broadcast(NO_DATA)
        }
    }
}

/// Warns when a key exists but its value would not convert; silent for a
/// genuinely absent key (that is the normal case).
fn warn_kind(table: &SCSTable, key: &str) {
    if table.find(key).is_some() {
        log::warn!("object mapper: value of {key:?} has the wrong kind, leaving no-data");
    }
}

/// A composition sub-table (`Composition { H2 84 He 16 }`) into a map.
fn composition(table: &SCSTable, key: &str) -> CompositionType {
    let mut out = CompositionType::new();
    if let Some(sub) = table.get_sub_table(key) {
        for entry in sub.entries() {
            if let Some(v) = entry.values.first().and_then(|v| v.get_number(0).ok()) {
                out.insert(entry.key.clone(), v);
            }
        }
    }
    out
}

/// Builds an [`Object`] from a root record: the key is the object type, the
/// string values are its names and the sub-table carries the fields.
pub fn get_object_from_record(record: &SCKeyValue) -> Object {
    let mut obj = Object {
        object_type: record.key.clone(),
        ..Default::default()
    };
    for value in &record.values {
        if let Ok(name) = value.as_string() {
            // Multiple designations live in one value separated by slashes.
            obj.name
                .extend(name.split('/').map(|s| s.trim().to_string()));
        }
    }
    let Some(sub) = record.sub_table.as_deref() else {
        return obj;
    };

    obj.date_updated = sub
        .get_date_time("DateUpdated")
        .map(|dt| dt.date())
        .unwrap_or_default();
    obj.disc_method = plain_string(sub, "DiscMethod");
    obj.disc_date = sub
        .get_date_time("DiscDate")
        .map(|dt| dt.date())
        .unwrap_or_default();
    obj.parent_body = plain_string(sub, "ParentBody");
    obj.class = plain_string(sub, "Class");
    obj.aster_type = plain_string(sub, "AsterType");
    obj.spec_class = plain_string(sub, "SpecClass");

    obj.mass = unit_f64(sub, "Mass");
    obj.dimensions = plain_vec3(sub, "Dimensions");
    if is_no_data(obj.dimensions.x()) {
        // A bare radius is the two-sphere shorthand.
        let r = unit_f64(sub, "Radius");
        if !is_no_data(r) {
            obj.dimensions = Vector::broadcast(2.0 * r);
        }
    }
    obj.inertia_moment = plain_f64(sub, "InertiaMoment");
    obj.albedo_bond = plain_f64(sub, "AlbedoBond");
    obj.albedo_geom = plain_f64(sub, "AlbedoGeom");
    obj.temperature = plain_f64(sub, "Temperature");
    obj.luminosity = plain_f64(sub, "Luminosity");
    obj.lum_bol = plain_f64(sub, "LumBol");
    obj.fe_h = plain_f64(sub, "FeH");
    obj.age = unit_f64(sub, "Age");
    obj.kerr_spin = plain_f64(sub, "KerrSpin");
    obj.kerr_charge = plain_f64(sub, "KerrCharge");

    obj.color = plain_vec3(sub, "Color");
    obj.brightness = plain_f64(sub, "Brightness");
    obj.brightness_real = plain_f64(sub, "BrightnessReal");

    obj.rotation_model = plain_string(sub, "RotationModel");
    obj.rotation.rotation_epoch = plain_f64(sub, "RotationEpoch");
    obj.rotation.obliquity = plain_f64(sub, "Obliquity");
    obj.rotation.eq_ascend_node = plain_f64(sub, "EqAscendNode");
    obj.rotation.rotation_offset = plain_f64(sub, "RotationOffset");
    obj.rotation.rotation_period = unit_f64(sub, "RotationPeriod");
    obj.rotation.precession = unit_f64(sub, "Precession");
    obj.rotation.tidal_locked = plain_bool(sub, "TidalLocked");
    if let Some(iau) = sub.get_sub_table("RotationModel") {
        obj.rotation_iau.epoch = plain_f64(&iau, "Epoch");
        obj.rotation_iau.pole_ra = plain_f64(&iau, "PoleRA");
        obj.rotation_iau.pole_ra_rate = plain_f64(&iau, "PoleRARate");
        obj.rotation_iau.pole_dec = plain_f64(&iau, "PoleDec");
        obj.rotation_iau.pole_dec_rate = plain_f64(&iau, "PoleDecRate");
        obj.rotation_iau.prime_meridian = plain_f64(&iau, "PrimeMeridian");
        obj.rotation_iau.rotation_rate = plain_f64(&iau, "RotationRate");
        obj.rotation_iau.rotation_accel = plain_f64(&iau, "RotationAccel");
        obj.rotation_iau.using_secular = plain_bool(&iau, "UsingSecular");
        for term in iau.find_all("PeriodicTerms") {
            if let Some(v) = term.values.first() {
                if let Ok(a) = v.as_number_array(6) {
                    obj.rotation_iau.periodic_terms.push([
                        a[0], a[1], a[2], a[3], a[4], a[5],
                    ]);
                }
            }
        }
    }

    obj.fixed_pos = sub.find("FixedPos").is_some() || sub.find("StaticPos").is_some();
    obj.position = plain_vec3(sub, "FixedPos");
    let orbit_key = ["Orbit", "BinaryOrbit"]
        .into_iter()
        .find(|k| sub.find(k).is_some());
    if let Some(key) = orbit_key {
        obj.orbit.binary = key == "BinaryOrbit";
        if let Some(orbit) = sub.get_sub_table(key) {
            obj.orbit.separation = unit_f64(&orbit, "Separation");
            obj.orbit.position_angle = plain_f64(&orbit, "PositionAngle");
            obj.orbit.analytic_model = plain_string(&orbit, "AnalyticModel");
            obj.orbit.ref_plane = plain_string(&orbit, "RefPlane");
            obj.orbit.epoch = plain_f64(&orbit, "Epoch");
            obj.orbit.period = unit_f64(&orbit, "Period");
            obj.orbit.pericenter_dist = unit_f64(&orbit, "PericenterDist");
            obj.orbit.grav_param = plain_f64(&orbit, "GravParam");
            obj.orbit.eccentricity = plain_f64(&orbit, "Eccentricity");
            obj.orbit.inclination = plain_f64(&orbit, "Inclination");
            obj.orbit.ascending_node = plain_f64(&orbit, "AscendingNode");
            obj.orbit.arg_of_pericenter = plain_f64(&orbit, "ArgOfPericenter");
            obj.orbit.mean_anomaly = plain_f64(&orbit, "MeanAnomaly");
        }
    }

    obj.no_life = plain_bool(sub, "NoLife");
    for (slot, entry) in obj.life.iter_mut().zip(sub.find_all("Life")) {
        if let Some(life) = entry.sub_table.as_deref() {
            slot.class = plain_string(life, "Class");
            slot.life_type = plain_string(life, "Type");
            if let Some(biome) = life.get_string("Biome") {
                slot.biome = biome.split('/').map(|s| s.trim().to_string()).collect();
            }
            slot.panspermia = plain_bool(life, "Panspermia");
        }
    }

    if let Some(interior) = sub.get_sub_table("Interior") {
        obj.interior = composition(&interior, "Composition");
    }

    if let Some(surface) = sub.get_sub_table("Surface") {
        obj.enable_surface = true;
        obj.surface.preset = plain_string(&surface, "Preset");
        obj.surface.diff_map = plain_string(&surface, "DiffMap");
        obj.surface.bump_height = plain_f64(&surface, "BumpHeight");
        obj.surface.surf_style = plain_f64(&surface, "SurfStyle");
        obj.surface.randomize = plain_vec3(&surface, "Randomize");
        obj.surface.color_dist_magn = plain_f64(&surface, "colorDistMagn");
        obj.surface.color_dist_freq = plain_f64(&surface, "colorDistFreq");
        obj.surface.detail_scale = plain_f64(&surface, "detailScale");
        obj.surface.sea_level = plain_f64(&surface, "seaLevel");
        obj.surface.snow_level = plain_f64(&surface, "snowLevel");
        obj.surface.tropic_latitude = plain_f64(&surface, "tropicLatitude");
        obj.surface.icecap_latitude = plain_f64(&surface, "icecapLatitude");
        obj.surface.climate_pole = plain_f64(&surface, "climatePole");
        obj.surface.climate_tropic = plain_f64(&surface, "climateTropic");
        obj.surface.climate_equator = plain_f64(&surface, "climateEquator");
        obj.surface.main_freq = plain_f64(&surface, "mainFreq");
        obj.surface.montes_magn = plain_f64(&surface, "montesMagn");
        obj.surface.montes_freq = plain_f64(&surface, "montesFreq");
        obj.surface.dunes_magn = plain_f64(&surface, "dunesMagn");
        obj.surface.hills_magn = plain_f64(&surface, "hillsMagn");
        obj.surface.crater_magn = plain_f64(&surface, "craterMagn");
        obj.surface.crater_freq = plain_f64(&surface, "craterFreq");
        obj.surface.crater_octaves = plain_u64(&surface, "craterOctaves");
        obj.surface.volcano_magn = plain_f64(&surface, "volcanoMagn");
        obj.surface.volcano_freq = plain_f64(&surface, "volcanoFreq");
        obj.surface.spec_bright_water = plain_f64(&surface, "SpecBrightWater");
        obj.surface.spec_bright_ice = plain_f64(&surface, "SpecBrightIce");
        obj.surface.roughness_water = plain_f64(&surface, "RoughnessWater");
        obj.surface.roughness_ice = plain_f64(&surface, "RoughnessIce");
    }

    obj.no_ocean = plain_bool(sub, "NoOcean");
    if let Some(ocean) = sub.get_sub_table("Ocean") {
        obj.ocean.height = unit_f64(&ocean, "Height");
        obj.ocean.hapke = plain_f64(&ocean, "Hapke");
        obj.ocean.day_ambient = plain_f64(&ocean, "DayAmbient");
        obj.ocean.composition = composition(&ocean, "Composition");
    }

    obj.no_clouds = plain_bool(sub, "NoClouds");
    if let Some(clouds) = sub.get_sub_table("Clouds") {
        obj.clouds.tidal_locked = plain_bool(&clouds, "TidalLocked");
        obj.clouds.coverage = plain_f64(&clouds, "Coverage");
        obj.clouds.main_freq = plain_f64(&clouds, "mainFreq");
        obj.clouds.main_octaves = plain_u64(&clouds, "mainOctaves");
        obj.clouds.stripe_zones = plain_f64(&clouds, "stripeZones");
        obj.clouds.stripe_fluct = plain_f64(&clouds, "stripeFluct");
        obj.clouds.stripe_twist = plain_f64(&clouds, "stripeTwist");
        obj.clouds.cyclone_magn = plain_f64(&clouds, "cycloneMagn");
        obj.clouds.cyclone_freq = plain_f64(&clouds, "cycloneFreq");
        obj.clouds.cyclone_density = plain_f64(&clouds, "cycloneDensity");
        obj.clouds.cyclone_octaves = plain_u64(&clouds, "cycloneOctaves");
        for layer_entry in clouds.find_all("Layer") {
            if let Some(layer) = layer_entry.sub_table.as_deref() {
                let mut out = CloudLayerParams {
                    height: unit_f64(layer, "Height"),
                    velocity: unit_f64(layer, "Velocity"),
                    rotation_offset: plain_f64(layer, "RotationOffset"),
                    subsurf_scat_bright: plain_f64(layer, "SubsurfScatBright"),
                    subsurf_scat_power: plain_f64(layer, "SubsurfScatPower"),
                    opacity: plain_f64(layer, "Opacity"),
                    ..Default::default()
                };
                out.diff_map = plain_string(layer, "DiffMap");
                obj.clouds.layers.push(out);
            }
        }
    }

    obj.no_atmosphere = plain_bool(sub, "NoAtmosphere");
    if let Some(atmo) = sub.get_sub_table("Atmosphere") {
        obj.atmosphere.model = plain_string(&atmo, "Model");
        obj.atmosphere.height = unit_f64(&atmo, "Height");
        obj.atmosphere.density = plain_f64(&atmo, "Density");
        obj.atmosphere.pressure = plain_f64(&atmo, "Pressure");
        obj.atmosphere.adiabat = plain_f64(&atmo, "Adiabat");
        obj.atmosphere.greenhouse = plain_f64(&atmo, "Greenhouse");
        obj.atmosphere.bright = plain_f64(&atmo, "Bright");
        obj.atmosphere.opacity = plain_f64(&atmo, "Opacity");
        obj.atmosphere.sky_light = plain_f64(&atmo, "SkyLight");
        obj.atmosphere.hue = plain_f64(&atmo, "Hue");
        obj.atmosphere.saturation = plain_f64(&atmo, "Saturation");
        obj.atmosphere.composition = composition(&atmo, "Composition");
    }

    if let Some(climate) = sub.get_sub_table("Climate") {
        obj.enable_climate = true;
        obj.climate.global_wind_speed = plain_f64(&climate, "GlobalWindSpeed");
        obj.climate.min_surface_temp = plain_f64(&climate, "MinSurfaceTemp");
        obj.climate.max_surface_temp = plain_f64(&climate, "MaxSurfaceTemp");
        obj.climate.atmo_profile = plain_string(&climate, "AtmoProfile");
    }

    obj.no_aurora = plain_bool(sub, "NoAurora");
    if let Some(aurora) = sub.get_sub_table("Aurora") {
        obj.aurora.height = unit_f64(&aurora, "Height");
        obj.aurora.north_lat = plain_f64(&aurora, "NorthLat");
        obj.aurora.north_lon = plain_f64(&aurora, "NorthLon");
        obj.aurora.north_radius = unit_f64(&aurora, "NorthRadius");
        obj.aurora.north_width = unit_f64(&aurora, "NorthWidth");
        obj.aurora.north_rings = plain_u64(&aurora, "NorthRings");
        obj.aurora.north_bright = plain_f64(&aurora, "NorthBright");
        obj.aurora.south_lat = plain_f64(&aurora, "SouthLat");
        obj.aurora.south_lon = plain_f64(&aurora, "SouthLon");
        obj.aurora.south_radius = unit_f64(&aurora, "SouthRadius");
        obj.aurora.south_width = unit_f64(&aurora, "SouthWidth");
        obj.aurora.south_rings = plain_u64(&aurora, "SouthRings");
        obj.aurora.south_bright = plain_f64(&aurora, "SouthBright");
        obj.aurora.top_color = plain_vec3(&aurora, "TopColor");
        obj.aurora.bottom_color = plain_vec3(&aurora, "BottomColor");
    }

    obj.no_rings = plain_bool(sub, "NoRings");
    if let Some(rings) = sub.get_sub_table("Rings") {
        obj.rings.texture = plain_string(&rings, "Texture");
        obj.rings.inner_radius = unit_f64(&rings, "InnerRadius");
        obj.rings.outer_radius = unit_f64(&rings, "OuterRadius");
        obj.rings.edge_radius = unit_f64(&rings, "EdgeRadius");
        obj.rings.mean_radius = unit_f64(&rings, "MeanRadius");
        obj.rings.thickness = unit_f64(&rings, "Thickness");
        obj.rings.rocks_max_size = unit_f64(&rings, "RocksMaxSize");
        obj.rings.chart_radius = unit_f64(&rings, "ChartRadius");
        obj.rings.rotation_period = unit_f64(&rings, "RotationPeriod");
        obj.rings.brightness = plain_f64(&rings, "Brightness");
        obj.rings.front_bright = plain_f64(&rings, "FrontBright");
        obj.rings.back_bright = plain_f64(&rings, "BackBright");
        obj.rings.density = plain_f64(&rings, "Density");
        obj.rings.opacity = plain_f64(&rings, "Opacity");
        obj.rings.self_shadow = plain_f64(&rings, "SelfShadow");
        obj.rings.planet_shadow = plain_f64(&rings, "PlanetShadow");
        obj.rings.frequency = plain_f64(&rings, "frequency");
        obj.rings.density_scale = plain_f64(&rings, "densityScale");
        obj.rings.density_offset = plain_f64(&rings, "densityOffset");
        obj.rings.color_contrast = plain_f64(&rings, "colorContrast");
        obj.rings.front_color = plain_vec3(&rings, "FrontColor");
        obj.rings.back_thick_color = plain_vec3(&rings, "BackThickColor");
        obj.rings.back_ice_color = plain_vec3(&rings, "BackIceColor");
        obj.rings.back_dust_color = plain_vec3(&rings, "BackDustColor");
    }

    obj.no_accretion_disk = plain_bool(sub, "NoAccretionDisk");
    if let Some(disk) = sub.get_sub_table("AccretionDisk") {
        obj.accretion_disk.inner_radius = unit_f64(&disk, "InnerRadius");
        obj.accretion_disk.outer_radius = unit_f64(&disk, "OuterRadius");
        obj.accretion_disk.inner_thickness = unit_f64(&disk, "InnerThickness");
        obj.accretion_disk.outer_thickness = unit_f64(&disk, "OuterThickness");
        obj.accretion_disk.accretion_rate = plain_f64(&disk, "AccretionRate");
        obj.accretion_disk.temperature = plain_f64(&disk, "Temperature");
        obj.accretion_disk.density = plain_f64(&disk, "Density");
        obj.accretion_disk.luminosity = plain_f64(&disk, "Luminosity");
        obj.accretion_disk.brightness = plain_f64(&disk, "Brightness");
        obj.accretion_disk.jet_length = unit_f64(&disk, "JetLength");
        obj.accretion_disk.jet_start_radius = unit_f64(&disk, "JetStartRadius");
        obj.accretion_disk.jet_end_radius = unit_f64(&disk, "JetEndRadius");
        obj.accretion_disk.jet_velocity = plain_f64(&disk, "JetVelocity");
    }

    obj.no_corona = plain_bool(sub, "NoCorona");
    if let Some(corona) = sub.get_sub_table("Corona") {
        obj.corona.radius = unit_f64(&corona, "Radius");
        obj.corona.period = unit_f64(&corona, "Period");
        obj.corona.brightness = plain_f64(&corona, "Brightness");
        obj.corona.ray_density = plain_f64(&corona, "RayDensity");
        obj.corona.ray_curv = plain_f64(&corona, "RayCurv");
    }

    obj.no_comet_tail = plain_bool(sub, "NoCometTail");
    if let Some(tail) = sub.get_sub_table("CometTail") {
        obj.comet_tail.max_length = unit_f64(&tail, "MaxLength");
        obj.comet_tail.gas_to_dust = plain_f64(&tail, "GasToDust");
        obj.comet_tail.particles = plain_u64(&tail, "Particles");
        obj.comet_tail.gas_bright = plain_f64(&tail, "GasBright");
        obj.comet_tail.dust_bright = plain_f64(&tail, "DustBright");
        obj.comet_tail.gas_color = plain_vec3(&tail, "GasColor");
        obj.comet_tail.dust_color = plain_vec3(&tail, "DustColor");
    }

    obj
}

/// Finds an object by name in a parsed catalog and maps it.
///
/// ```
/// use cse_rs::object::get_object;
/// use cse_rs::scstream::parse_catalog;
///
/// let table = parse_catalog("Star \"Sun\" { Temperature 5772 }").unwrap();
/// let sun = get_object(&table, "Sun").unwrap();
/// assert_eq!(sun.object_type, "Star");
/// assert_eq!(sun.temperature, 5772.0);
/// ```
pub fn get_object(table: &SCSTable, name: &str) -> Option<Object> {
    let record = table.entries().iter().find(|e| {
        e.values
            .iter()
            .any(|v| {
                v.as_string()
                    .is_ok_and(|s| s.split('/').any(|n| n.trim() == name))
            })
    })?;
    Some(get_object_from_record(record))
}

fn composition_table(map: &CompositionType) -> SCSTable {
    let mut t = SCSTable::default();
    for (k, v) in map {
        t.add_f64(k, *v);
    }
    t
}

fn vec3_slice(v: &Vec3) -> [f64; 3] {
    [v.x(), v.y(), v.z()]
}

/// Serializes an [`Object`] back into a one-record catalog tree; fields at
/// the sentinel are omitted.
pub fn make_table(obj: &Object) -> SCSTable {
    let mut sub = SCSTable::default();

    sub.add_date("DateUpdated", &obj.date_updated);
    sub.add_string("DiscMethod", &obj.disc_method);
    sub.add_date("DiscDate", &obj.disc_date);
    sub.add_string("ParentBody", &obj.parent_body);
    sub.add_string("Class", &obj.class);
    sub.add_string("AsterType", &obj.aster_type);
    sub.add_string("SpecClass", &obj.spec_class);

    sub.add_f64("Mass", obj.mass);
    sub.add_array("Dimensions", &vec3_slice(&obj.dimensions));
    sub.add_f64("InertiaMoment", obj.inertia_moment);
    sub.add_f64("AlbedoBond", obj.albedo_bond);
    sub.add_f64("AlbedoGeom", obj.albedo_geom);
    sub.add_f64("Temperature", obj.temperature);
    sub.add_f64("Luminosity", obj.luminosity);
    sub.add_f64("LumBol", obj.lum_bol);
    sub.add_f64("FeH", obj.fe_h);
    sub.add_f64("Age", obj.age);
    sub.add_f64("KerrSpin", obj.kerr_spin);
    sub.add_f64("KerrCharge", obj.kerr_charge);

    sub.add_array("Color", &vec3_slice(&obj.color));
    sub.add_f64("Brightness", obj.brightness);
    sub.add_f64("BrightnessReal", obj.brightness_real);

    sub.add_string("RotationModel", &obj.rotation_model);
    sub.add_f64("RotationEpoch", obj.rotation.rotation_epoch);
    sub.add_f64("Obliquity", obj.rotation.obliquity);
    sub.add_f64("EqAscendNode", obj.rotation.eq_ascend_node);
    sub.add_f64("RotationOffset", obj.rotation.rotation_offset);
    sub.add_f64("RotationPeriod", obj.rotation.rotation_period);
    sub.add_f64("Precession", obj.rotation.precession);
    sub.add_bool("TidalLocked", obj.rotation.tidal_locked);

    if !obj.orbit.binary {
        let mut orbit = SCSTable::default();
        orbit.add_string("AnalyticModel", &obj.orbit.analytic_model);
        orbit.add_string("RefPlane", &obj.orbit.ref_plane);
        orbit.add_f64("Epoch", obj.orbit.epoch);
        orbit.add_f64("Period", obj.orbit.period);
        orbit.add_f64("PericenterDist", obj.orbit.pericenter_dist);
        orbit.add_f64("GravParam", obj.orbit.grav_param);
        orbit.add_f64("Eccentricity", obj.orbit.eccentricity);
        orbit.add_f64("Inclination", obj.orbit.inclination);
        orbit.add_f64("AscendingNode", obj.orbit.ascending_node);
        orbit.add_f64("ArgOfPericenter", obj.orbit.arg_of_pericenter);
        orbit.add_f64("MeanAnomaly", obj.orbit.mean_anomaly);
        sub.add_sub_table("Orbit", orbit);
    } else {
        let mut orbit = SCSTable::default();
        orbit.add_string("RefPlane", &obj.orbit.ref_plane);
        orbit.add_f64("Epoch", obj.orbit.epoch);
        orbit.add_f64("Separation", obj.orbit.separation);
        orbit.add_f64("PositionAngle", obj.orbit.position_angle);
        sub.add_sub_table("BinaryOrbit", orbit);
    }

    sub.add_bool("NoLife", obj.no_life);
    for life in &obj.life {
        let mut t = SCSTable::default();
        t.add_string("Class", &life.class);
        t.add_string("Type", &life.life_type);
        if !life.biome.is_empty() {
            t.add_string("Biome", &life.biome.join("/"));
        }
        t.add_bool("Panspermia", life.panspermia);
        sub.add_sub_table("Life", t);
    }

    if !obj.interior.is_empty() {
        let mut interior = SCSTable::default();
        interior.add_sub_table("Composition", composition_table(&obj.interior));
        sub.add_sub_table("Interior", interior);
    }

    if obj.enable_surface {
        let mut t = SCSTable::default();
        t.add_string("Preset", &obj.surface.preset);
        t.add_string("DiffMap", &obj.surface.diff_map);
        t.add_f64("BumpHeight", obj.surface.bump_height);
        t.add_f64("SurfStyle", obj.surface.surf_style);
        t.add_array("Randomize", &vec3_slice(&obj.surface.randomize));
        t.add_f64("colorDistMagn", obj.surface.color_dist_magn);
        t.add_f64("colorDistFreq", obj.surface.color_dist_freq);
        t.add_f64("detailScale", obj.surface.detail_scale);
        t.add_f64("seaLevel", obj.surface.sea_level);
        t.add_f64("snowLevel", obj.surface.snow_level);
        t.add_f64("tropicLatitude", obj.surface.tropic_latitude);
        t.add_f64("icecapLatitude", obj.surface.icecap_latitude);
        t.add_f64("climatePole", obj.surface.climate_pole);
        t.add_f64("climateTropic", obj.surface.climate_tropic);
        t.add_f64("climateEquator", obj.surface.climate_equator);
        t.add_f64("mainFreq", obj.surface.main_freq);
        t.add_f64("montesMagn", obj.surface.montes_magn);
        t.add_f64("montesFreq", obj.surface.montes_freq);
        t.add_f64("dunesMagn", obj.surface.dunes_magn);
        t.add_f64("hillsMagn", obj.surface.hills_magn);
        t.add_f64("craterMagn", obj.surface.crater_magn);
        t.add_f64("craterFreq", obj.surface.crater_freq);
        t.add_u64("craterOctaves", obj.surface.crater_octaves);
        t.add_f64("volcanoMagn", obj.surface.volcano_magn);
        t.add_f64("volcanoFreq", obj.surface.volcano_freq);
        t.add_f64("SpecBrightWater", obj.surface.spec_bright_water);
        t.add_f64("SpecBrightIce", obj.surface.spec_bright_ice);
        t.add_f64("RoughnessWater", obj.surface.roughness_water);
        t.add_f64("RoughnessIce", obj.surface.roughness_ice);
        sub.add_sub_table("Surface", t);
    }

    sub.add_bool("NoOcean", obj.no_ocean);
    {
        let mut t = SCSTable::default();
        t.add_f64("Height", obj.ocean.height);
        t.add_f64("Hapke", obj.ocean.hapke);
        t.add_f64("DayAmbient", obj.ocean.day_ambient);
        if !obj.ocean.composition.is_empty() {
            t.add_sub_table("Composition", composition_table(&obj.ocean.composition));
        }
        sub.add_sub_table("Ocean", t);
    }

    sub.add_bool("NoClouds", obj.no_clouds);
    {
        let mut t = SCSTable::default();
        t.add_bool("TidalLocked", obj.clouds.tidal_locked);
        t.add_f64("Coverage", obj.clouds.coverage);
        t.add_f64("mainFreq", obj.clouds.main_freq);
        t.add_u64("mainOctaves", obj.clouds.main_octaves);
        t.add_f64("stripeZones", obj.clouds.stripe_zones);
        t.add_f64("stripeFluct", obj.clouds.stripe_fluct);
        t.add_f64("stripeTwist", obj.clouds.stripe_twist);
        t.add_f64("cycloneMagn", obj.clouds.cyclone_magn);
        t.add_f64("cycloneFreq", obj.clouds.cyclone_freq);
        t.add_f64("cycloneDensity", obj.clouds.cyclone_density);
        t.add_u64("cycloneOctaves", obj.clouds.cyclone_octaves);
        for layer in &obj.clouds.layers {
            let mut l = SCSTable::default();
            l.add_f64("Height", layer.height);
            l.add_f64("Velocity", layer.velocity);
            l.add_f64("RotationOffset", layer.rotation_offset);
            l.add_f64("SubsurfScatBright", layer.subsurf_scat_bright);
            l.add_f64("SubsurfScatPower", layer.subsurf_scat_power);
            l.add_f64("Opacity", layer.opacity);
            l.add_string("DiffMap", &layer.diff_map);
            t.add_sub_table("Layer", l);
        }
        sub.add_sub_table("Clouds", t);
    }

    sub.add_bool("NoAtmosphere", obj.no_atmosphere);
    {
        let mut t = SCSTable::default();
        t.add_string("Model", &obj.atmosphere.model);
        t.add_f64("Height", obj.atmosphere.height);
        t.add_f64("Density", obj.atmosphere.density);
        t.add_f64("Pressure", obj.atmosphere.pressure);
        t.add_f64("Adiabat", obj.atmosphere.adiabat);
        t.add_f64("Greenhouse", obj.atmosphere.greenhouse);
        t.add_f64("Bright", obj.atmosphere.bright);
        t.add_f64("Opacity", obj.atmosphere.opacity);
        t.add_f64("SkyLight", obj.atmosphere.sky_light);
        t.add_f64("Hue", obj.atmosphere.hue);
        t.add_f64("Saturation", obj.atmosphere.saturation);
        if !obj.atmosphere.composition.is_empty() {
            t.add_sub_table("Composition", composition_table(&obj.atmosphere.composition));
        }
        sub.add_sub_table("Atmosphere", t);
    }

    if obj.enable_climate {
        let mut t = SCSTable::default();
        t.add_f64("GlobalWindSpeed", obj.climate.global_wind_speed);
        t.add_f64("MinSurfaceTemp", obj.climate.min_surface_temp);
        t.add_f64("MaxSurfaceTemp", obj.climate.max_surface_temp);
        t.add_string("AtmoProfile", &obj.climate.atmo_profile);
        sub.add_sub_table("Climate", t);
    }

    sub.add_bool("NoAurora", obj.no_aurora);
    {
        let mut t = SCSTable::default();
        t.add_f64("Height", obj.aurora.height);
        t.add_f64("NorthLat", obj.aurora.north_lat);
        t.add_f64("NorthLon", obj.aurora.north_lon);
        t.add_f64("NorthRadius", obj.aurora.north_radius);
        t.add_f64("NorthWidth", obj.aurora.north_width);
        t.add_u64("NorthRings", obj.aurora.north_rings);
        t.add_f64("NorthBright", obj.aurora.north_bright);
        t.add_f64("SouthLat", obj.aurora.south_lat);
        t.add_f64("SouthLon", obj.aurora.south_lon);
        t.add_f64("SouthRadius", obj.aurora.south_radius);
        t.add_f64("SouthWidth", obj.aurora.south_width);
        t.add_u64("SouthRings", obj.aurora.south_rings);
        t.add_f64("SouthBright", obj.aurora.south_bright);
        t.add_array("TopColor", &vec3_slice(&obj.aurora.top_color));
        t.add_array("BottomColor", &vec3_slice(&obj.aurora.bottom_color));
        sub.add_sub_table("Aurora", t);
    }

    sub.add_bool("NoRings", obj.no_rings);
    {
        let mut t = SCSTable::default();
        t.add_string("Texture", &obj.rings.texture);
        t.add_f64("InnerRadius", obj.rings.inner_radius);
        t.add_f64("OuterRadius", obj.rings.outer_radius);
        t.add_f64("EdgeRadius", obj.rings.edge_radius);
        t.add_f64("MeanRadius", obj.rings.mean_radius);
        t.add_f64("Thickness", obj.rings.thickness);
        t.add_f64("RocksMaxSize", obj.rings.rocks_max_size);
        t.add_f64("ChartRadius", obj.rings.chart_radius);
        t.add_f64("RotationPeriod", obj.rings.rotation_period);
        t.add_f64("Brightness", obj.rings.brightness);
        t.add_f64("FrontBright", obj.rings.front_bright);
        t.add_f64("BackBright", obj.rings.back_bright);
        t.add_f64("Density", obj.rings.density);
        t.add_f64("Opacity", obj.rings.opacity);
        t.add_f64("SelfShadow", obj.rings.self_shadow);
        t.add_f64("PlanetShadow", obj.rings.planet_shadow);
        t.add_f64("frequency", obj.rings.frequency);
        t.add_f64("densityScale", obj.rings.density_scale);
        t.add_f64("densityOffset", obj.rings.density_offset);
        t.add_f64("colorContrast", obj.rings.color_contrast);
        t.add_array("FrontColor", &vec3_slice(&obj.rings.front_color));
        t.add_array("BackThickColor", &vec3_slice(&obj.rings.back_thick_color));
        t.add_array("BackIceColor", &vec3_slice(&obj.rings.back_ice_color));
        t.add_array("BackDustColor", &vec3_slice(&obj.rings.back_dust_color));
        sub.add_sub_table("Rings", t);
    }

    sub.add_bool("NoAccretionDisk", obj.no_accretion_disk);
    {
        let mut t = SCSTable::default();
        t.add_f64("InnerRadius", obj.accretion_disk.inner_radius);
        t.add_f64("OuterRadius", obj.accretion_disk.outer_radius);
        t.add_f64("InnerThickness", obj.accretion_disk.inner_thickness);
        t.add_f64("OuterThickness", obj.accretion_disk.outer_thickness);
        t.add_f64("AccretionRate", obj.accretion_disk.accretion_rate);
        t.add_f64("Temperature", obj.accretion_disk.temperature);
        t.add_f64("Density", obj.accretion_disk.density);
        t.add_f64("Luminosity", obj.accretion_disk.luminosity);
        t.add_f64("Brightness", obj.accretion_disk.brightness);
        t.add_f64("JetLength", obj.accretion_disk.jet_length);
        t.add_f64("JetStartRadius", obj.accretion_disk.jet_start_radius);
        t.add_f64("JetEndRadius", obj.accretion_disk.jet_end_radius);
        t.add_f64("JetVelocity", obj.accretion_disk.jet_velocity);
        sub.add_sub_table("AccretionDisk", t);
    }

    sub.add_bool("NoCorona", obj.no_corona);
    {
        let mut t = SCSTable::default();
        t.add_f64("Radius", obj.corona.radius);
        t.add_f64("Period", obj.corona.period);
        t.add_f64("Brightness", obj.corona.brightness);
        t.add_f64("RayDensity", obj.corona.ray_density);
        t.add_f64("RayCurv", obj.corona.ray_curv);
        sub.add_sub_table("Corona", t);
    }

    sub.add_bool("NoCometTail", obj.no_comet_tail);
    {
        let mut t = SCSTable::default();
        t.add_f64("MaxLength", obj.comet_tail.max_length);
        t.add_f64("GasToDust", obj.comet_tail.gas_to_dust);
        t.add_u64("Particles", obj.comet_tail.particles);
        t.add_f64("GasBright", obj.comet_tail.gas_bright);
        t.add_f64("DustBright", obj.comet_tail.dust_bright);
        t.add_array("GasColor", &vec3_slice(&obj.comet_tail.gas_color));
        t.add_array("DustColor", &vec3_slice(&obj.comet_tail.dust_color));
        sub.add_sub_table("CometTail", t);
    }

    let mut root = SCSTable::default();
    root.entries_mut().push(SCKeyValue {
        key: if obj.object_type.is_empty() {
            "Object".to_string()
        } else {
            obj.object_type.clone()
        },
        values: vec![crate::scstream::Value::string(obj.name.join("/"))],
        sub_table: Some(Rc::new(sub)),
    });
    root
}
