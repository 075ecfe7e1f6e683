use objview_assets::ShaderSources;
use objview_common::ShadingModel;

/// Uniform block shared by every built-in stage. Must match `SceneUniforms` in gpu.rs.
const SCENE_UNIFORMS: &str = r#"
struct SceneUniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    mvp: mat4x4<f32>,
    light_position: vec4<f32>,
    light_color: vec4<f32>,
    view_position: vec4<f32>,
    color_channels: vec4<f32>,
    light_on: u32,
    _pad0: u32,
    _pad1: u32,
    _pad2: u32,
};

@group(0) @binding(0)
var<uniform> scene: SceneUniforms;
"#;

/// Phong vertex stage: separate model, view and projection matrices.
const PHONG_VERTEX: &str = r#"
struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world = scene.model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = scene.projection * scene.view * world;
    out.world_position = world.xyz;
    out.world_normal = (scene.model * vec4<f32>(vertex.normal, 0.0)).xyz;
    return out;
}
"#;

const PHONG_FRAGMENT: &str = r#"
struct FragmentInput {
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
};

@fragment
fn fs_main(in: FragmentInput) -> @location(0) vec4<f32> {
    let base = scene.color_channels.rgb;
    let ambient = 0.15 * base;
    if (scene.light_on == 0u) {
        return vec4<f32>(ambient, 1.0);
    }

    let n = normalize(in.world_normal);
    let to_light = normalize(scene.light_position.xyz - in.world_position);
    let diffuse = max(dot(n, to_light), 0.0) * scene.light_color.rgb * base;

    let to_eye = normalize(scene.view_position.xyz - in.world_position);
    let reflected = reflect(-to_light, n);
    let specular = pow(max(dot(to_eye, reflected), 0.0), 32.0) * scene.light_color.rgb;

    return vec4<f32>(ambient + diffuse + 0.5 * specular, 1.0);
}
"#;

/// Basic vertex stage: the pre-multiplied combined transform only.
const BASIC_VERTEX: &str = r#"
struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = scene.mvp * vec4<f32>(vertex.position, 1.0);
    out.normal = vertex.normal;
    return out;
}
"#;

const BASIC_FRAGMENT: &str = r#"
@fragment
fn fs_main(@location(0) normal: vec3<f32>) -> @location(0) vec4<f32> {
    let shade = 0.6 + 0.4 * abs(normalize(normal).y);
    return vec4<f32>(scene.color_channels.rgb * shade, 1.0);
}
"#;

/// Built-in WGSL pair for a shading model.
pub fn builtin(shading: ShadingModel) -> ShaderSources {
    let (label, vertex, fragment) = match shading {
        ShadingModel::Phong => ("phong", PHONG_VERTEX, PHONG_FRAGMENT),
        ShadingModel::Basic => ("basic", BASIC_VERTEX, BASIC_FRAGMENT),
    };
    ShaderSources::new(
        label,
        format!("{SCENE_UNIFORMS}{vertex}"),
        format!("{SCENE_UNIFORMS}{fragment}"),
    )
}
