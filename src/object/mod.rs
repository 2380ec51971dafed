//! The astronomical-object record and its catalog mapper.
//!
//! [`Object`] is a flat record of named fields; absent scalars hold the
//! no-data sentinel, absent toggles are false and absent strings are empty.
//! [`get_object`] fills a record from a parsed catalog tree and
//! [`make_table`] writes one back, omitting everything still at the
//! sentinel, so a populated record survives a parse/serialize round trip
//! bit-for-bit on its numbers and byte-for-byte on its strings.

use std::collections::BTreeMap;

use crate::datetime::CSEDate;
use crate::linalg::{Vec3, Vector};
use crate::mathfuncs::ieee754::{NO_DATA, NO_DATA_UINT};

/// Known unit suffixes on numeric keys and their multipliers to SI.
pub const UNIT_MULTIPLIERS: &[(&str, f64)] = &[
    ("Km", 1.0e3),
    ("AU", 1.495978707e11),
    ("LY", 9.4607304725808e15),
    ("Pc", 3.0856775814913673e16),
    ("EarthRadius", 6.3781e6),
    ("SolarRadius", 6.957e8),
    ("EarthMass", 5.9722e24),
    ("JupiterMass", 1.89813e27),
    ("SolarMass", 1.98847e30),
    ("h", 3600.0),
    ("d", 86400.0),
    ("day", 86400.0),
    ("yr", 3.15576e7),
    ("year", 3.15576e7),
];

/// A no-data 3-vector.
fn no_data_vec3() -> Vec3 {
    Vector::broadcast(NO_DATA)
}

/// Composition maps are element name to percentage.
pub type CompositionType = BTreeMap<String, f64>;

/// Uniform rotation parameters, used when no rotation model is named.
#[derive(Debug, Clone)]
pub struct SimpleRotationModel {
    /// Epoch of the rotation elements, JD.
    pub rotation_epoch: f64,
    /// Axial tilt in degrees.
    pub obliquity: f64,
    /// Equatorial ascending node in degrees.
    pub eq_ascend_node: f64,
    /// Rotation offset at epoch in degrees.
    pub rotation_offset: f64,
    /// Sidereal rotation period in seconds.
    pub rotation_period: f64,
    /// Precession period in seconds.
    pub precession: f64,
    /// Whether the body is tidally locked.
    pub tidal_locked: bool,
}

impl Default for SimpleRotationModel {
    fn default() -> Self {
        SimpleRotationModel {
            rotation_epoch: NO_DATA,
            obliquity: NO_DATA,
            eq_ascend_node: NO_DATA,
            rotation_offset: NO_DATA,
            rotation_period: NO_DATA,
            precession: NO_DATA,
            tidal_locked: false,
        }
    }
}

/// IAU-style rotation model with optional periodic terms.
#[derive(Debug, Clone)]
pub struct IauRotationModel {
    /// Epoch, JD.
    pub epoch: f64,
    /// Pole right ascension, degrees.
    pub pole_ra: f64,
    /// Pole RA rate, degrees per century.
    pub pole_ra_rate: f64,
    /// Pole declination, degrees.
    pub pole_dec: f64,
    /// Pole declination rate, degrees per century.
    pub pole_dec_rate: f64,
    /// Prime meridian at epoch, degrees.
    pub prime_meridian: f64,
    /// Rotation rate, degrees per day.
    pub rotation_rate: f64,
    /// Rotation acceleration, degrees per century squared.
    pub rotation_accel: f64,
    /// Whether periodic terms use centuries instead of days.
    pub using_secular: bool,
    /// Periodic terms as `(RA amp, Dec amp, meridian amp, phase, freq,
    /// freq rate)` rows.
    pub periodic_terms: Vec<[f64; 6]>,
}

impl Default for IauRotationModel {
    fn default() -> Self {
        IauRotationModel {
            epoch: NO_DATA,
            pole_ra: NO_DATA,
            pole_ra_rate: NO_DATA,
            pole_dec: NO_DATA,
            pole_dec_rate: NO_DATA,
            prime_meridian: NO_DATA,
            rotation_rate: NO_DATA,
            rotation_accel: NO_DATA,
            using_secular: false,
            periodic_terms: Vec::new(),
        }
    }
}

/// Orbital elements, binary or Keplerian.
#[derive(Debug, Clone)]
pub struct OrbitParams {
    /// Set when the record came from a `BinaryOrbit` tag.
    pub binary: bool,
    /// Separation from the parent body, metres.
    pub separation: f64,
    /// Position angle, degrees.
    pub position_angle: f64,
    /// Named analytic model, if any.
    pub analytic_model: String,
    /// Reference plane name (Ecliptic, Equator, ...).
    pub ref_plane: String,
    /// Epoch, JD.
    pub epoch: f64,
    /// Orbital period, seconds.
    pub period: f64,
    /// Pericenter distance, metres.
    pub pericenter_dist: f64,
    /// Gravitational parameter.
    pub grav_param: f64,
    /// Eccentricity.
    pub eccentricity: f64,
    /// Inclination, degrees.
    pub inclination: f64,
    /// Longitude of the ascending node, degrees.
    pub ascending_node: f64,
    /// Argument of pericenter, degrees.
    pub arg_of_pericenter: f64,
    /// Mean anomaly at epoch, degrees.
    pub mean_anomaly: f64,
}

impl Default for OrbitParams {
    fn default() -> Self {
        OrbitParams {
            binary: false,
            separation: NO_DATA,
            position_angle: NO_DATA,
            analytic_model: String::new(),
            ref_plane: String::new(),
            epoch: NO_DATA,
            period: NO_DATA,
            pericenter_dist: NO_DATA,
            grav_param: NO_DATA,
            eccentricity: NO_DATA,
            inclination: NO_DATA,
            ascending_node: NO_DATA,
            arg_of_pericenter: NO_DATA,
            mean_anomaly: NO_DATA,
        }
    }
}

/// A biosphere description.
#[derive(Debug, Clone, Default)]
pub struct LifeParams {
    /// Biosphere class.
    pub class: String,
    /// Biochemistry type.
    pub life_type: String,
    /// Biome names.
    pub biome: Vec<String>,
    /// Whether the biosphere spread from elsewhere.
    pub panspermia: bool,
}

/// Landscape generator parameters (the commonly used subset).
#[derive(Debug, Clone)]
pub struct SurfaceParams {
    /// Named preset.
    pub preset: String,
    /// Diffuse map path.
    pub diff_map: String,
    /// Elevation scale of the bump map, metres.
    pub bump_height: f64,
    /// Style selector.
    pub surf_style: f64,
    /// Generator seed vector.
    pub randomize: Vec3,
    /// Colour variation magnitude.
    pub color_dist_magn: f64,
    /// Colour variation frequency.
    pub color_dist_freq: f64,
    /// Detail octave scale.
    pub detail_scale: f64,
    /// Sea level, 0-1.
    pub sea_level: f64,
    /// Snow line, 0-1.
    pub snow_level: f64,
    /// Tropic latitude, degrees.
    pub tropic_latitude: f64,
    /// Icecap latitude, degrees.
    pub icecap_latitude: f64,
    /// Polar climate index.
    pub climate_pole: f64,
    /// Tropical climate index.
    pub climate_tropic: f64,
    /// Equatorial climate index.
    pub climate_equator: f64,
    /// Main noise frequency.
    pub main_freq: f64,
    /// Mountain magnitude.
    pub montes_magn: f64,
    /// Mountain frequency.
    pub montes_freq: f64,
    /// Dune magnitude.
    pub dunes_magn: f64,
    /// Hill magnitude.
    pub hills_magn: f64,
    /// Crater magnitude.
    pub crater_magn: f64,
    /// Crater frequency.
    pub crater_freq: f64,
    /// Crater octave count.
    pub crater_octaves: u64,
    /// Volcano magnitude.
    pub volcano_magn: f64,
    /// Volcano frequency.
    pub volcano_freq: f64,
    /// Water specular brightness.
    pub spec_bright_water: f64,
    /// Ice specular brightness.
    pub spec_bright_ice: f64,
    /// Water roughness.
    pub roughness_water: f64,
    /// Ice roughness.
    pub roughness_ice: f64,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        SurfaceParams {
            preset: String::new(),
            diff_map: String::new(),
            bump_height: NO_DATA,
            surf_style: NO_DATA,
            randomize: no_data_vec3(),
            color_dist_magn: NO_DATA,
            color_dist_freq: NO_DATA,
            detail_scale: NO_DATA,
            sea_level: NO_DATA,
            snow_level: NO_DATA,
            tropic_latitude: NO_DATA,
            icecap_latitude: NO_DATA,
            climate_pole: NO_DATA,
            climate_tropic: NO_DATA,
            climate_equator: NO_DATA,
            main_freq: NO_DATA,
            montes_magn: NO_DATA,
            montes_freq: NO_DATA,
            dunes_magn: NO_DATA,
            hills_magn: NO_DATA,
            crater_magn: NO_DATA,
            crater_freq: NO_DATA,
            crater_octaves: NO_DATA_UINT,
            volcano_magn: NO_DATA,
            volcano_freq: NO_DATA,
            spec_bright_water: NO_DATA,
            spec_bright_ice: NO_DATA,
            roughness_water: NO_DATA,
            roughness_ice: NO_DATA,
        }
    }
}

/// Global ocean parameters.
#[derive(Debug, Clone)]
pub struct OceanParams {
    /// Ocean depth, metres.
    pub height: f64,
    /// Hapke scattering parameter.
    pub hapke: f64,
    /// Day-side ambient light.
    pub day_ambient: f64,
    /// Composition, percent by element.
    pub composition: CompositionType,
}

impl Default for OceanParams {
    fn default() -> Self {
        OceanParams {
            height: NO_DATA,
            hapke: NO_DATA,
            day_ambient: NO_DATA,
            composition: CompositionType::new(),
        }
    }
}

/// One cloud deck.
#[derive(Debug, Clone)]
pub struct CloudLayerParams {
    /// Deck height, metres.
    pub height: f64,
    /// Wind velocity, metres per second.
    pub velocity: f64,
    /// Rotation offset, degrees.
    pub rotation_offset: f64,
    /// Subsurface scattering brightness.
    pub subsurf_scat_bright: f64,
    /// Subsurface scattering power.
    pub subsurf_scat_power: f64,
    /// Deck opacity.
    pub opacity: f64,
    /// Cloud map path.
    pub diff_map: String,
}

impl Default for CloudLayerParams {
    fn default() -> Self {
        CloudLayerParams {
            height: NO_DATA,
            velocity: NO_DATA,
            rotation_offset: NO_DATA,
            subsurf_scat_bright: NO_DATA,
            subsurf_scat_power: NO_DATA,
            opacity: NO_DATA,
            diff_map: String::new(),
        }
    }
}

/// Cloud system parameters.
#[derive(Debug, Clone)]
pub struct CloudsParams {
    /// Whether the pattern is tidally locked.
    pub tidal_locked: bool,
    /// Total coverage, 0-1.
    pub coverage: f64,
    /// Main noise frequency.
    pub main_freq: f64,
    /// Main octave count.
    pub main_octaves: u64,
    /// Stripe zone count.
    pub stripe_zones: f64,
    /// Stripe fluctuation.
    pub stripe_fluct: f64,
    /// Stripe twist.
    pub stripe_twist: f64,
    /// Cyclone magnitude.
    pub cyclone_magn: f64,
    /// Cyclone frequency.
    pub cyclone_freq: f64,
    /// Cyclone density.
    pub cyclone_density: f64,
    /// Cyclone octave count.
    pub cyclone_octaves: u64,
    /// The decks, bottom up.
    pub layers: Vec<CloudLayerParams>,
}

impl Default for CloudsParams {
    fn default() -> Self {
        CloudsParams {
            tidal_locked: false,
            coverage: NO_DATA,
            main_freq: NO_DATA,
            main_octaves: NO_DATA_UINT,
            stripe_zones: NO_DATA,
            stripe_fluct: NO_DATA,
            stripe_twist: NO_DATA,
            cyclone_magn: NO_DATA,
            cyclone_freq: NO_DATA,
            cyclone_density: NO_DATA,
            cyclone_octaves: NO_DATA_UINT,
            layers: Vec::new(),
        }
    }
}

/// Atmosphere parameters.
#[derive(Debug, Clone)]
pub struct AtmoParams {
    /// Named atmosphere model.
    pub model: String,
    /// Scale height, metres.
    pub height: f64,
    /// Surface density.
    pub density: f64,
    /// Surface pressure.
    pub pressure: f64,
    /// Adiabatic index.
    pub adiabat: f64,
    /// Greenhouse temperature increment.
    pub greenhouse: f64,
    /// Brightness.
    pub bright: f64,
    /// Opacity.
    pub opacity: f64,
    /// Sky light level.
    pub sky_light: f64,
    /// Hue shift.
    pub hue: f64,
    /// Saturation.
    pub saturation: f64,
    /// Composition, percent by gas.
    pub composition: CompositionType,
}

impl Default for AtmoParams {
    fn default() -> Self {
        AtmoParams {
            model: String::new(),
            height: NO_DATA,
            density: NO_DATA,
            pressure: NO_DATA,
            adiabat: NO_DATA,
            greenhouse: NO_DATA,
            bright: NO_DATA,
            opacity: NO_DATA,
            sky_light: NO_DATA,
            hue: NO_DATA,
            saturation: NO_DATA,
            composition: CompositionType::new(),
        }
    }
}

/// Climate summary parameters.
#[derive(Debug, Clone)]
pub struct ClimateParams {
    /// Mean wind speed, metres per second.
    pub global_wind_speed: f64,
    /// Minimum surface temperature, kelvin.
    pub min_surface_temp: f64,
    /// Maximum surface temperature, kelvin.
    pub max_surface_temp: f64,
    /// Named atmosphere profile.
    pub atmo_profile: String,
}

impl Default for ClimateParams {
    fn default() -> Self {
        ClimateParams {
            global_wind_speed: NO_DATA,
            min_surface_temp: NO_DATA,
            max_surface_temp: NO_DATA,
            atmo_profile: String::new(),
        }
    }
}

/// Aurora oval parameters for both hemispheres.
#[derive(Debug, Clone)]
pub struct AuroraParams {
    /// Display height, metres.
    pub height: f64,
    /// North oval latitude, degrees.
    pub north_lat: f64,
    /// North oval longitude, degrees.
    pub north_lon: f64,
    /// North oval radius, metres.
    pub north_radius: f64,
    /// North oval width, metres.
    pub north_width: f64,
    /// North ring count.
    pub north_rings: u64,
    /// North brightness.
    pub north_bright: f64,
    /// South oval latitude, degrees.
    pub south_lat: f64,
    /// South oval longitude, degrees.
    pub south_lon: f64,
    /// South oval radius, metres.
    pub south_radius: f64,
    /// South oval width, metres.
    pub south_width: f64,
    /// South ring count.
    pub south_rings: u64,
    /// South brightness.
    pub south_bright: f64,
    /// Top colour.
    pub top_color: Vec3,
    /// Bottom colour.
    pub bottom_color: Vec3,
}

impl Default for AuroraParams {
    fn default() -> Self {
        AuroraParams {
            height: NO_DATA,
            north_lat: NO_DATA,
            north_lon: NO_DATA,
            north_radius: NO_DATA,
            north_width: NO_DATA,
            north_rings: NO_DATA_UINT,
            north_bright: NO_DATA,
            south_lat: NO_DATA,
            south_lon: NO_DATA,
            south_radius: NO_DATA,
            south_width: NO_DATA,
            south_rings: NO_DATA_UINT,
            south_bright: NO_DATA,
            top_color: no_data_vec3(),
            bottom_color: no_data_vec3(),
        }
    }
}

/// Ring system parameters.
#[derive(Debug, Clone)]
pub struct RingsParams {
    /// Ring texture path.
    pub texture: String,
    /// Inner radius, metres.
    pub inner_radius: f64,
    /// Outer radius, metres.
    pub outer_radius: f64,
    /// Outer radius of the dense part, metres.
    pub edge_radius: f64,
    /// Densest radius, metres.
    pub mean_radius: f64,
    /// Thickness, metres.
    pub thickness: f64,
    /// Largest rock size, metres.
    pub rocks_max_size: f64,
    /// Chart-mode outer radius, metres.
    pub chart_radius: f64,
    /// Rotation period, seconds.
    pub rotation_period: f64,
    /// Brightness.
    pub brightness: f64,
    /// Front-lit brightness.
    pub front_bright: f64,
    /// Back-lit brightness.
    pub back_bright: f64,
    /// Density.
    pub density: f64,
    /// Opacity.
    pub opacity: f64,
    /// Self-shadowing factor.
    pub self_shadow: f64,
    /// Planet shadow factor.
    pub planet_shadow: f64,
    /// Density noise frequency.
    pub frequency: f64,
    /// Density scale.
    pub density_scale: f64,
    /// Density offset.
    pub density_offset: f64,
    /// Colour contrast.
    pub color_contrast: f64,
    /// Front-scatter colour.
    pub front_color: Vec3,
    /// Thick back-scatter colour.
    pub back_thick_color: Vec3,
    /// Icy back-scatter colour.
    pub back_ice_color: Vec3,
    /// Dusty back-scatter colour.
    pub back_dust_color: Vec3,
}

impl Default for RingsParams {
    fn default() -> Self {
        RingsParams {
            texture: String::new(),
            inner_radius: NO_DATA,
            outer_radius: NO_DATA,
            edge_radius: NO_DATA,
            mean_radius: NO_DATA,
            thickness: NO_DATA,
            rocks_max_size: NO_DATA,
            chart_radius: NO_DATA,
            rotation_period: NO_DATA,
            brightness: NO_DATA,
            front_bright: NO_DATA,
            back_bright: NO_DATA,
            density: NO_DATA,
            opacity: NO_DATA,
            self_shadow: NO_DATA,
            planet_shadow: NO_DATA,
            frequency: NO_DATA,
            density_scale: NO_DATA,
            density_offset: NO_DATA,
            color_contrast: NO_DATA,
            front_color: no_data_vec3(),
            back_thick_color: no_data_vec3(),
            back_ice_color: no_data_vec3(),
            back_dust_color: no_data_vec3(),
        }
    }
}

/// Accretion disk parameters.
#[derive(Debug, Clone)]
pub struct AccretionDiskParams {
    /// Inner radius, metres.
    pub inner_radius: f64,
    /// Outer radius, metres.
    pub outer_radius: f64,
    /// Inner thickness, metres.
    pub inner_thickness: f64,
    /// Outer thickness, metres.
    pub outer_thickness: f64,
    /// Accretion rate.
    pub accretion_rate: f64,
    /// Temperature, kelvin.
    pub temperature: f64,
    /// Density.
    pub density: f64,
    /// Luminosity, watts.
    pub luminosity: f64,
    /// Brightness.
    pub brightness: f64,
    /// Jet length, metres.
    pub jet_length: f64,
    /// Jet start radius, metres.
    pub jet_start_radius: f64,
    /// Jet end radius, metres.
    pub jet_end_radius: f64,
    /// Jet velocity, metres per second.
    pub jet_velocity: f64,
}

impl Default for AccretionDiskParams {
    fn default() -> Self {
        AccretionDiskParams {
            inner_radius: NO_DATA,
            outer_radius: NO_DATA,
            inner_thickness: NO_DATA,
            outer_thickness: NO_DATA,
            accretion_rate: NO_DATA,
            temperature: NO_DATA,
            density: NO_DATA,
            luminosity: NO_DATA,
            brightness: NO_DATA,
            jet_length: NO_DATA,
            jet_start_radius: NO_DATA,
            jet_end_radius: NO_DATA,
            jet_velocity: NO_DATA,
        }
    }
}

/// Stellar corona parameters.
#[derive(Debug, Clone)]
pub struct CoronaParams {
    /// Radius, metres.
    pub radius: f64,
    /// Variation period, seconds.
    pub period: f64,
    /// Brightness.
    pub brightness: f64,
    /// Ray density.
    pub ray_density: f64,
    /// Ray curvature.
    pub ray_curv: f64,
}

impl Default for CoronaParams {
    fn default() -> Self {
        CoronaParams {
            radius: NO_DATA,
            period: NO_DATA,
            brightness: NO_DATA,
            ray_density: NO_DATA,
            ray_curv: NO_DATA,
        }
    }
}

/// Comet tail parameters.
#[derive(Debug, Clone)]
pub struct CometTailParams {
    /// Maximum tail length, metres.
    pub max_length: f64,
    /// Gas to dust ratio.
    pub gas_to_dust: f64,
    /// Particle count.
    pub particles: u64,
    /// Gas tail brightness.
    pub gas_bright: f64,
    /// Dust tail brightness.
    pub dust_bright: f64,
    /// Gas tail colour.
    pub gas_color: Vec3,
    /// Dust tail colour.
    pub dust_color: Vec3,
}

impl Default for CometTailParams {
    fn default() -> Self {
        CometTailParams {
            max_length: NO_DATA,
            gas_to_dust: NO_DATA,
            particles: NO_DATA_UINT,
            gas_bright: NO_DATA,
            dust_bright: NO_DATA,
            gas_color: no_data_vec3(),
            dust_color: no_data_vec3(),
        }
    }
}

/// A SpaceEngine-style astronomical object.
#[derive(Debug, Clone)]
pub struct Object {
    /// Object type: the root key of the record (Star, Planet, Moon, ...).
    pub object_type: String,
    /// Names, in catalog order.
    pub name: Vec<String>,
    /// Last update date.
    pub date_updated: CSEDate,
    /// Discovery method.
    pub disc_method: String,
    /// Discovery date.
    pub disc_date: CSEDate,
    /// Parent body name.
    pub parent_body: String,
    /// Classification.
    pub class: String,
    /// Asteroid sub-type.
    pub aster_type: String,
    /// Spectral class (stars only).
    pub spec_class: String,

    /// Mass, kilograms.
    pub mass: f64,
    /// Triaxial dimensions, metres.
    pub dimensions: Vec3,
    /// Moment of inertia factor.
    pub inertia_moment: f64,
    /// Bond albedo.
    pub albedo_bond: f64,
    /// Geometric albedo.
    pub albedo_geom: f64,
    /// Effective temperature, kelvin.
    pub temperature: f64,
    /// Visual luminosity, watts.
    pub luminosity: f64,
    /// Bolometric luminosity, watts.
    pub lum_bol: f64,
    /// Metallicity.
    pub fe_h: f64,
    /// Age, years.
    pub age: f64,
    /// Angular momentum of a Kerr black hole.
    pub kerr_spin: f64,
    /// Electric charge of a Kerr-Newman black hole.
    pub kerr_charge: f64,

    /// Display colour.
    pub color: Vec3,
    /// Apparent brightness boost.
    pub brightness: f64,
    /// Physical brightness boost.
    pub brightness_real: f64,

    /// Named rotation model, empty for the simple model.
    pub rotation_model: String,
    /// Simple uniform rotation.
    pub rotation: SimpleRotationModel,
    /// IAU rotation model.
    pub rotation_iau: IauRotationModel,

    /// Whether the position is fixed rather than orbital.
    pub fixed_pos: bool,
    /// Fixed position, metres.
    pub position: Vec3,
    /// Orbit elements.
    pub orbit: OrbitParams,

    /// Set when the catalog disables life.
    pub no_life: bool,
    /// Up to two biospheres.
    pub life: [LifeParams; 2],

    /// Interior composition, percent by component.
    pub interior: CompositionType,

    /// Whether a landscape block was present.
    pub enable_surface: bool,
    /// Landscape parameters.
    pub surface: SurfaceParams,

    /// Set when the catalog disables the ocean.
    pub no_ocean: bool,
    /// Ocean parameters.
    pub ocean: OceanParams,

    /// Set when the catalog disables clouds.
    pub no_clouds: bool,
    /// Cloud parameters.
    pub clouds: CloudsParams,

    /// Set when the catalog disables the atmosphere.
    pub no_atmosphere: bool,
    /// Atmosphere parameters.
    pub atmosphere: AtmoParams,

    /// Whether a climate block was present.
    pub enable_climate: bool,
    /// Climate parameters.
    pub climate: ClimateParams,

    /// Set when the catalog disables aurorae.
    pub no_aurora: bool,
    /// Aurora parameters.
    pub aurora: AuroraParams,

    /// Set when the catalog disables rings.
    pub no_rings: bool,
    /// Ring parameters.
    pub rings: RingsParams,

    /// Set when the catalog disables the accretion disk.
    pub no_accretion_disk: bool,
    /// Accretion disk parameters.
    pub accretion_disk: AccretionDiskParams,

    /// Set when the catalog disables the corona.
    pub no_corona: bool,
    /// Corona parameters.
    pub corona: CoronaParams,

    /// Set when the catalog disables the comet tail.
    pub no_comet_tail: bool,
    /// Comet tail parameters.
    pub comet_tail: CometTailParams,
}

impl Default for Object {
    fn default() -> Self {
        Object {
            object_type: String::new(),
            name: Vec::new(),
            date_updated: CSEDate::null(),
            disc_method: String::new(),
            disc_date: CSEDate::null(),
            parent_body: String::new(),
            class: String::new(),
            aster_type: String::new(),
            spec_class: String::new(),
            mass: NO_DATA,
            dimensions: no_data_vec3(),
            inertia_moment: NO_DATA,
            albedo_bond: NO_DATA,
            albedo_geom: NO_DATA,
            temperature: NO_DATA,
            luminosity: NO_DATA,
            lum_bol: NO_DATA,
            fe_h: NO_DATA,
            age: NO_DATA,
            kerr_spin: NO_DATA,
            kerr_charge: NO_DATA,
            color: no_data_vec3(),
            brightness: NO_DATA,
            brightness_real: NO_DATA,
            rotation_model: String::new(),
            rotation: SimpleRotationModel::default(),
            rotation_iau: IauRotationModel::default(),
            fixed_pos: false,
            position: no_data_vec3(),
            orbit: OrbitParams::default(),
            no_life: false,
            life: [LifeParams::default(), LifeParams::default()],
            interior: CompositionType::new(),
            enable_surface: false,
            surface: SurfaceParams::default(),
            no_ocean: false,
            ocean: OceanParams::default(),
            no_clouds: false,
            clouds: CloudsParams::default(),
            no_atmosphere: false,
            atmosphere: AtmoParams::default(),
            enable_climate: false,
            climate: ClimateParams::default(),
            no_aurora: false,
            aurora: AuroraParams::default(),
            no_rings: false,
            rings: RingsParams::default(),
            no_accretion_disk: false,
            accretion_disk: AccretionDiskParams::default(),
            no_corona: false,
            corona: CoronaParams::default(),
            no_comet_tail: false,
            comet_tail: CometTailParams::default(),
        }
    }
}

mod mapper;

pub use mapper::{get_object, get_object_from_record, make_table};
