/// Embedded GLSL sources for the built-in programs
///
/// Every scene program includes the same std140 `Matrices` block at
/// binding 0, so camera matrices arrive through one shared buffer.

/// Shared camera block, binding 0: projection first, then view
pub const MATRICES_BLOCK: &str = "
layout (std140) uniform Matrices {
    mat4 projection;
    mat4 view;
};
";

pub const LIGHT_VERT: &str = "
#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aNormal;
layout (location = 2) in vec2 aTexCoords;

layout (std140) uniform Matrices {
    mat4 projection;
    mat4 view;
};

uniform mat4 model;

out vec3 FragPos;
out vec3 Normal;
out vec2 TexCoords;

void main()
{
    FragPos = vec3(model * vec4(aPos, 1.0));
    Normal = mat3(transpose(inverse(model))) * aNormal;
    TexCoords = aTexCoords;
    gl_Position = projection * view * vec4(FragPos, 1.0);
}
";

pub const DIRECTIONAL_FRAG: &str = "
#version 330 core
struct DirLight {
    vec3 direction;
    vec3 ambient;
    vec3 diffuse;
    vec3 specular;
};
struct Material {
    float shininess;
};

in vec3 FragPos;
in vec3 Normal;

uniform DirLight dirLight;
uniform Material material;
uniform vec3 viewPos;
uniform vec3 objectColor;

out vec4 FragColor;

void main()
{
    vec3 norm = normalize(Normal);
    vec3 viewDir = normalize(viewPos - FragPos);
    vec3 lightDir = normalize(-dirLight.direction);
    float diff = max(dot(norm, lightDir), 0.0);
    vec3 reflectDir = reflect(-lightDir, norm);
    float spec = pow(max(dot(viewDir, reflectDir), 0.0), material.shininess);
    vec3 result = (dirLight.ambient + dirLight.diffuse * diff) * objectColor
                + dirLight.specular * spec;
    FragColor = vec4(result, 1.0);
}
";

pub const POINT_FRAG: &str = "
#version 330 core
struct PointLight {
    vec3 position;
    vec3 ambient;
    vec3 diffuse;
    vec3 specular;
    float constant;
    float linear;
    float quadratic;
};
struct Material {
    float shininess;
};

in vec3 FragPos;
in vec3 Normal;

uniform PointLight pointLight;
uniform Material material;
uniform vec3 viewPos;
uniform vec3 objectColor;

out vec4 FragColor;

void main()
{
    vec3 norm = normalize(Normal);
    vec3 viewDir = normalize(viewPos - FragPos);
    vec3 lightDir = normalize(pointLight.position - FragPos);
    float diff = max(dot(norm, lightDir), 0.0);
    vec3 reflectDir = reflect(-lightDir, norm);
    float spec = pow(max(dot(viewDir, reflectDir), 0.0), material.shininess);
    float distance = length(pointLight.position - FragPos);
    float attenuation = 1.0 / (pointLight.constant + pointLight.linear * distance
                             + pointLight.quadratic * (distance * distance));
    vec3 result = (pointLight.ambient + pointLight.diffuse * diff) * objectColor
                + pointLight.specular * spec;
    FragColor = vec4(result * attenuation, 1.0);
}
";

pub const SPOT_FRAG: &str = "
#version 330 core
struct SpotLight {
    vec3 position;
    vec3 direction;
    float cutOff;
    vec3 ambient;
    vec3 diffuse;
    vec3 specular;
    float constant;
    float linear;
    float quadratic;
};
struct Material {
    float shininess;
};

in vec3 FragPos;
in vec3 Normal;

uniform SpotLight spotLight;
uniform Material material;
uniform vec3 viewPos;
uniform vec3 objectColor;

out vec4 FragColor;

void main()
{
    vec3 norm = normalize(Normal);
    vec3 viewDir = normalize(viewPos - FragPos);
    vec3 lightDir = normalize(spotLight.position - FragPos);
    float theta = dot(lightDir, normalize(-spotLight.direction));
    vec3 result = spotLight.ambient * objectColor;
    if (theta > spotLight.cutOff)
    {
        float diff = max(dot(norm, lightDir), 0.0);
        vec3 reflectDir = reflect(-lightDir, norm);
        float spec = pow(max(dot(viewDir, reflectDir), 0.0), material.shininess);
        float distance = length(spotLight.position - FragPos);
        float attenuation = 1.0 / (spotLight.constant + spotLight.linear * distance
                                 + spotLight.quadratic * (distance * distance));
        result += (spotLight.diffuse * diff * objectColor
                 + spotLight.specular * spec) * attenuation;
    }
    FragColor = vec4(result, 1.0);
}
";

pub const LIGHT_SOURCE_FRAG: &str = "
#version 330 core
uniform vec3 objectColor;
out vec4 FragColor;
void main()
{
    FragColor = vec4(objectColor, 1.0);
}
";

pub const SCREEN_VERT: &str = "
#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 2) in vec2 aTexCoords;

out vec2 TexCoords;

void main()
{
    TexCoords = aTexCoords;
    gl_Position = vec4(aPos.x, aPos.y, 0.0, 1.0);
}
";

pub const MAIN_SCREEN_FRAG: &str = "
#version 330 core
in vec2 TexCoords;
uniform sampler2D screenTexture;
out vec4 FragColor;
void main()
{
    FragColor = vec4(texture(screenTexture, TexCoords).rgb, 1.0);
}
";

pub const SUB_SCREEN_FRAG: &str = "
#version 330 core
in vec2 TexCoords;
uniform sampler2D screenTexture;
out vec4 FragColor;
void main()
{
    vec3 color = texture(screenTexture, TexCoords).rgb;
    float gray = dot(color, vec3(0.2126, 0.7152, 0.0722));
    FragColor = vec4(vec3(gray), 1.0);
}
";

pub const WATER_VERT: &str = "
#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aNormal;
layout (location = 2) in vec2 aTexCoords;

layout (std140) uniform Matrices {
    mat4 projection;
    mat4 view;
};

#define WAVE_CAPACITY 8

uniform mat4 model;
uniform float time;
uniform int numWaves;
uniform float amplitude[WAVE_CAPACITY];
uniform float wavelength[WAVE_CAPACITY];
uniform float speed[WAVE_CAPACITY];
uniform vec2 direction[WAVE_CAPACITY];

out vec3 FragPos;
out vec3 Normal;
out vec2 TexCoords;

float waveHeight(vec2 p)
{
    float height = 0.0;
    for (int i = 0; i < numWaves; ++i)
    {
        if (wavelength[i] == 0.0)
            continue;
        float frequency = 2.0 * 3.14159265 / wavelength[i];
        height += amplitude[i] * sin(frequency * dot(direction[i], p) + speed[i] * time);
    }
    return height;
}

void main()
{
    vec3 pos = aPos;
    pos.y += waveHeight(aPos.xz);
    FragPos = vec3(model * vec4(pos, 1.0));
    Normal = aNormal;
    TexCoords = aTexCoords;
    gl_Position = projection * view * vec4(FragPos, 1.0);
}
";

pub const WATER_FRAG: &str = "
#version 330 core
in vec3 FragPos;
in vec3 Normal;

uniform vec3 EyePos;

out vec4 FragColor;

void main()
{
    vec3 deep = vec3(0.0, 0.2, 0.4);
    vec3 shallow = vec3(0.1, 0.5, 0.7);
    vec3 viewDir = normalize(EyePos - FragPos);
    float facing = max(dot(normalize(Normal), viewDir), 0.0);
    FragColor = vec4(mix(deep, shallow, facing), 0.85);
}
";

pub const HEIGHT_FIELD_VERT: &str = "
#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 2) in vec2 aTexCoords;

out vec2 TexCoords;

void main()
{
    TexCoords = aTexCoords;
    gl_Position = vec4(aPos.x, aPos.y, 0.0, 1.0);
}
";

pub const HEIGHT_FIELD_FRAG: &str = "
#version 330 core
in vec2 TexCoords;

uniform sampler2D heightMap;
uniform vec2 u_center;
uniform int u_mode;

out vec4 FragColor;

void main()
{
    vec2 texel = 1.0 / vec2(textureSize(heightMap, 0));
    float here = texture(heightMap, TexCoords).r;
    float left = texture(heightMap, TexCoords - vec2(texel.x, 0.0)).r;
    float right = texture(heightMap, TexCoords + vec2(texel.x, 0.0)).r;
    float down = texture(heightMap, TexCoords - vec2(0.0, texel.y)).r;
    float up = texture(heightMap, TexCoords + vec2(0.0, texel.y)).r;
    float next = (left + right + down + up) / 2.0 - here;
    next *= 0.995;
    if (u_mode == 1 && distance(TexCoords, u_center) < 0.02)
        next = 1.0;
    FragColor = vec4(next, next, next, 1.0);
}
";
