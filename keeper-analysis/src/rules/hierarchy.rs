//! Explicit type hierarchy.

use std::path::Path;

use keeper_core::errors::ConfigError;
use keeper_core::traits::TypeReflection;
use keeper_core::types::collections::FxHashMap;

/// Child-to-parent type map implementing [`TypeReflection`].
///
/// Loaded from a JSON object (`{"Texture2D": "Texture", ...}`) or built from
/// the engine defaults. Types absent from the map are roots.
#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    parents: FxHashMap<String, String>,
}

const ENGINE_PARENTS: &[(&str, &str)] = &[
    ("Actor", "Object"),
    ("Pawn", "Actor"),
    ("Character", "Pawn"),
    ("Controller", "Actor"),
    ("PlayerController", "Controller"),
    ("AIController", "Controller"),
    ("GameModeBase", "Actor"),
    ("GameStateBase", "Actor"),
    ("PlayerState", "Actor"),
    ("HUD", "Actor"),
    ("ActorComponent", "Object"),
    ("SceneComponent", "ActorComponent"),
    ("UserWidget", "Object"),
    ("BlueprintFunctionLibrary", "Object"),
    ("BlueprintInterface", "Object"),
    ("Blueprint", "Object"),
    ("AnimBlueprint", "Blueprint"),
    ("WidgetBlueprint", "Blueprint"),
    ("AnimationAsset", "Object"),
    ("AnimSequenceBase", "AnimationAsset"),
    ("AnimSequence", "AnimSequenceBase"),
    ("AnimComposite", "AnimSequenceBase"),
    ("AnimMontage", "AnimComposite"),
    ("BlendSpace", "AnimationAsset"),
    ("BlendSpace1D", "BlendSpace"),
    ("AimOffsetBlendSpace", "BlendSpace"),
    ("PoseAsset", "AnimationAsset"),
    ("Skeleton", "Object"),
    ("StreamableRenderAsset", "Object"),
    ("StaticMesh", "StreamableRenderAsset"),
    ("SkeletalMesh", "StreamableRenderAsset"),
    ("DestructibleMesh", "SkeletalMesh"),
    ("PhysicsAsset", "Object"),
    ("PhysicalMaterial", "Object"),
    ("MaterialInterface", "Object"),
    ("Material", "MaterialInterface"),
    ("MaterialInstance", "MaterialInterface"),
    ("MaterialInstanceConstant", "MaterialInstance"),
    ("MaterialFunctionInterface", "Object"),
    ("MaterialFunction", "MaterialFunctionInterface"),
    ("MaterialParameterCollection", "Object"),
    ("SubsurfaceProfile", "Object"),
    ("Texture", "StreamableRenderAsset"),
    ("Texture2D", "Texture"),
    ("TextureCube", "Texture"),
    ("TextureRenderTarget2D", "Texture"),
    ("MediaTexture", "Texture"),
    ("SoundBase", "Object"),
    ("SoundWave", "SoundBase"),
    ("SoundCue", "SoundBase"),
    ("SoundAttenuation", "Object"),
    ("SoundClass", "Object"),
    ("SoundMix", "Object"),
    ("SoundConcurrency", "Object"),
    ("ParticleSystem", "Object"),
    ("NiagaraSystem", "Object"),
    ("NiagaraEmitter", "Object"),
    ("DataAsset", "Object"),
    ("PrimaryDataAsset", "DataAsset"),
    ("DataTable", "Object"),
    ("CurveBase", "Object"),
    ("CurveFloat", "CurveBase"),
    ("CurveVector", "CurveBase"),
    ("CurveLinearColor", "CurveBase"),
    ("CurveTable", "Object"),
    ("UserDefinedEnum", "Object"),
    ("UserDefinedStruct", "Object"),
    ("World", "Object"),
    ("Font", "Object"),
    ("LevelSequence", "Object"),
    ("BehaviorTree", "Object"),
    ("BlackboardData", "DataAsset"),
    ("EnvQuery", "DataAsset"),
];

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine's built-in class relationships.
    pub fn engine_defaults() -> Self {
        let mut hierarchy = Self::new();
        for (child, parent) in ENGINE_PARENTS {
            hierarchy.set_parent(*child, *parent);
        }
        hierarchy
    }

    /// Declare `parent` as the parent type of `child`, replacing any earlier one.
    pub fn set_parent(&mut self, child: impl Into<String>, parent: impl Into<String>) {
        self.parents.insert(child.into(), parent.into());
    }

    pub fn with_parent(mut self, child: impl Into<String>, parent: impl Into<String>) -> Self {
        self.set_parent(child, parent);
        self
    }

    /// Number of declared child-to-parent links.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Parse a JSON object mapping type names to parent type names.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let parents: FxHashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { parents })
    }

    /// Load a hierarchy file and layer it over the engine defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let extra = Self::from_json(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut hierarchy = Self::engine_defaults();
        hierarchy.parents.extend(extra.parents);
        Ok(hierarchy)
    }
}

impl TypeReflection for TypeHierarchy {
    fn parent_type_of(&self, type_name: &str) -> Option<&str> {
        self.parents.get(type_name).map(String::as_str)
    }
}
