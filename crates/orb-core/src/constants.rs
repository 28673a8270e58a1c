// Orb geometry and animation tuning constants

/// Sphere radius when the session is idle.
pub const BASE_RADIUS: f32 = 200.0;
/// Sphere radius the orb swells to while the agent speaks.
pub const MAX_RADIUS: f32 = 300.0;

/// Number of meridian polylines forming the wireframe sphere.
pub const NUM_LINES: usize = 25;
/// Segments per polyline; each line carries `LINE_STEPS + 1` points.
pub const LINE_STEPS: usize = 50;

/// Smoothing rate for rotation, amplitude, and color channels.
pub const SMOOTH_RATE: f32 = 0.1;
/// Radius smoothing rate while idle (slow settle).
pub const IDLE_RADIUS_RATE: f32 = 0.08;
/// Radius smoothing rate while speaking (snappier swell).
pub const SPEAKING_RADIUS_RATE: f32 = 0.15;

/// Points are rebuilt only while the radius is still this far from target.
pub const RADIUS_REBUILD_THRESHOLD: f32 = 0.1;

/// X tilt target while the agent speaks, radians.
pub const SPEAKING_TILT_X: f32 = std::f32::consts::PI * 0.1;
/// Per-frame growth of the yaw target (ambient spin, smoothed).
pub const SPIN_TARGET_STEP: f32 = 0.001;
/// Per-frame yaw added unconditionally at draw time.
pub const FRAME_SPIN_RATE: f32 = 0.005;

// Traveling-wave shape: frequency around the meridian, phase advance per
// frame, and radial displacement at full amplitude.
pub const WAVE_FREQUENCY: f32 = 4.0;
pub const WAVE_PHASE_PER_FRAME: f32 = 0.05;
pub const WAVE_DEPTH: f32 = 20.0;

/// Stroke width in pixels is `STROKE_BASE + amplitude`.
pub const STROKE_BASE: f32 = 2.0;

/// Gradient stops while no session is active: orange, pink, blue.
pub const DEFAULT_COLORS: [[u8; 3]; 3] = [[255, 140, 0], [255, 0, 128], [0, 191, 255]];

/// Background clear color (8-bit RGB).
pub const BACKGROUND_RGB: [u8; 3] = [42, 42, 114];

/// Bounded capacity of the transport-to-renderer event queue.
pub const EVENT_QUEUE_CAPACITY: usize = 64;
