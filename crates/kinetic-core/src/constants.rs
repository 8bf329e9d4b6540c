use std::time::Duration;

// Rig tuning constants shared by the core pipeline and the web frontend.

// Bone lengths (scene units, viewBox 300x400)
pub const THIGH_LEN: f32 = 115.0;
pub const CALF_LEN: f32 = 110.0;

// IK
pub const IK_EXTENSION_EPSILON: f32 = 0.1; // keeps the radicand clear of zero near full extension
pub const IK_MIN_DISTANCE: f32 = 1e-4; // below this hip and ankle are treated as coincident
pub const KNEE_BEND: f32 = -1.0; // knee folds forward for this rig

// Phase checkpoints
pub const PHASE_IDLE: f32 = 0.0;
pub const PHASE_LOADED: f32 = 1.0;
pub const PHASE_FIRED: f32 = 2.0;
pub const PHASE_RECOVERED: f32 = 3.0;

// Loading spring (eccentric phase)
pub const LOADING_STIFFNESS: f32 = 120.0;
pub const LOADING_DAMPING: f32 = 18.0;

// Explosive spring (concentric phase)
pub const EXPLOSIVE_STIFFNESS: f32 = 300.0;
pub const EXPLOSIVE_DAMPING: f32 = 20.0;

pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.005;
pub const SPRING_REST_SPEED: f32 = 0.01;
pub const SPRING_SUBSTEP: Duration = Duration::from_micros(2_000); // fixed integration step

// Minimum visual hold of the explosive pulse before recovery is forced
pub const EXPLOSIVE_HOLD: Duration = Duration::from_millis(300);
pub const RECOVERY_DURATION: Duration = Duration::from_millis(400);

// Calf and tendon geometry
pub const MUSCLE_JUNCTION_RATIO: f32 = 0.55; // where the calf belly meets the tendon
pub const CALF_BULGE_REST: f32 = 28.0;
pub const CALF_BULGE_LOADED: f32 = 16.0;
pub const TENDON_OFFSET_REST: f32 = 5.0;
pub const TENDON_OFFSET_LOADED: f32 = 10.0;
pub const BONE_STROKE_WIDTH: f32 = 10.0;
pub const MUSCLE_STROKE_WIDTH: f32 = 2.0;

// HUD
pub const PROGRESS_MAX: f32 = 100.0;
pub const CALF_ANCHOR_RATIO: f32 = 0.3;
pub const ACHILLES_ANCHOR_RATIO: f32 = 0.75;
pub const LABEL_BOX_WIDTH: f32 = 110.0;
pub const LABEL_BOX_HEIGHT: f32 = 24.0;
pub const LABEL_TEXT_INSET: f32 = 8.0;
pub const JOINT_NODE_RADIUS: f32 = 5.0;

// Scene
pub const VIEWBOX_WIDTH: f32 = 300.0;
pub const VIEWBOX_HEIGHT: f32 = 400.0;
pub const FLOOR_Y: f32 = 320.0;
pub const FLOOR_X_RANGE: [f32; 2] = [20.0, 280.0];
