// Scene tuning shared by the web and native front-ends.

// Layer stack
pub const LAYER_COUNT: usize = 4;
pub const CUBE_SIZE: f32 = 3.0; // edge length of the full cube
pub const LAYER_HEIGHT: f32 = CUBE_SIZE / LAYER_COUNT as f32;
pub const LAYER_SPACING: f32 = 1.5; // extra gap between layers once spread
pub const LAYER_OPACITY: f32 = 0.95;
pub const LAYER_EMISSIVE: f32 = 0.35;

// Scroll progress at which the stack has finished spreading and tilting back
pub const SPREAD_END: f32 = 0.2;

// Active ranges per layer, top to bottom
pub const LAYER_RANGES: [[f32; 2]; LAYER_COUNT] =
    [[0.25, 0.40], [0.45, 0.60], [0.65, 0.80], [0.85, 1.00]];

// Focus ramp as a fraction of each range's length
pub const FOCUS_RAMP_FRACTION: f32 = 0.05;

// Camera
pub const CAMERA_KEYFRAMES: [f32; 9] = [0.20, 0.25, 0.425, 0.45, 0.625, 0.65, 0.825, 0.85, 1.00];
pub const CAMERA_FAR_Z: f32 = 10.0;
pub const CAMERA_NEAR_Z: f32 = 5.0;
pub const CAMERA_DRIFT_PER_FOCUS: f32 = 0.5; // lateral offset per unit of summed focus
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Intro tilt and title fade
pub const TILT_Y_START: f32 = -std::f32::consts::PI / 6.0;
pub const TILT_X_START: f32 = std::f32::consts::PI / 8.0;
pub const INTRO_FADE_END: f32 = 0.15;

// Pointer-following light
pub const POINTER_LIGHT_RANGE: f32 = 10.0;
pub const POINTER_LIGHT_Z: f32 = 10.0;

// Palette (sRGB, 0..1)
pub const LAYER_COLORS: [[f32; 3]; LAYER_COUNT] = [
    [0.976, 0.980, 0.984], // #f9fafb
    [0.953, 0.957, 0.965], // #f3f4f6
    [0.898, 0.906, 0.922], // #e5e7eb
    [0.820, 0.835, 0.859], // #d1d5db
];
pub const EFFECT_COLOR: [f32; 3] = [0.0, 1.0, 1.0]; // neon cyan
pub const GRAPH_GLOW_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const CHART_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

// Effect sizing
pub const EFFECT_FACE_OFFSET: f32 = 0.01; // effects sit just in front of the layer face
pub const DATA_STREAM_PARTICLES: usize = 30;
pub const DATA_STREAM_RADIUS: f32 = 0.05;
pub const DATA_STREAM_FRAME_RATE: f32 = 60.0; // particle speeds are authored per frame at this rate
pub const GRAPH_NODES: usize = 15;
pub const GRAPH_NODE_RADIUS: f32 = 0.1;
pub const GRAPH_CORE_RADIUS: f32 = 0.2;
pub const VORTEX_POINTS: usize = 200;
pub const VORTEX_CORE_RADIUS: f32 = 0.3;
pub const CHART_POINTS: usize = 10;

// Seed for the decorative effects
pub const DEFAULT_EFFECT_SEED: u64 = 42;

// Overlay panel
pub const OVERLAY_FADE_SEC: f64 = 0.3;
pub const OVERLAY_SLIDE_PX: f32 = 20.0;
