//! Enumerable asset type tags.
//!
//! Rules are keyed by tag, not by free-form type name, so a definition naming
//! a type Keeper does not know fails when the rules are loaded instead of
//! silently never matching.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! type_tags {
    ($($variant:ident),+ $(,)?) => {
        /// Known asset and object types.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TypeTag {
            $($variant),+
        }

        impl TypeTag {
            /// Every known tag, in declaration order.
            pub const ALL: &'static [TypeTag] = &[$(TypeTag::$variant),+];

            /// The host type name this tag stands for.
            pub fn name(&self) -> &'static str {
                match self {
                    $(TypeTag::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

type_tags! {
    Object,
    // Gameplay classes
    Actor,
    Pawn,
    Character,
    Controller,
    PlayerController,
    AIController,
    GameModeBase,
    GameStateBase,
    PlayerState,
    HUD,
    ActorComponent,
    SceneComponent,
    UserWidget,
    // Blueprints
    Blueprint,
    AnimBlueprint,
    WidgetBlueprint,
    BlueprintFunctionLibrary,
    BlueprintInterface,
    // Animation
    AnimationAsset,
    AnimSequenceBase,
    AnimSequence,
    AnimMontage,
    AnimComposite,
    BlendSpace,
    BlendSpace1D,
    AimOffsetBlendSpace,
    Skeleton,
    PoseAsset,
    // Meshes and physics
    StreamableRenderAsset,
    StaticMesh,
    SkeletalMesh,
    PhysicsAsset,
    PhysicalMaterial,
    DestructibleMesh,
    // Materials
    MaterialInterface,
    Material,
    MaterialInstance,
    MaterialInstanceConstant,
    MaterialFunctionInterface,
    MaterialFunction,
    MaterialParameterCollection,
    SubsurfaceProfile,
    // Textures
    Texture,
    Texture2D,
    TextureCube,
    TextureRenderTarget2D,
    MediaTexture,
    // Audio
    SoundBase,
    SoundWave,
    SoundCue,
    SoundAttenuation,
    SoundClass,
    SoundMix,
    SoundConcurrency,
    // Effects
    ParticleSystem,
    NiagaraSystem,
    NiagaraEmitter,
    // Data
    DataAsset,
    PrimaryDataAsset,
    DataTable,
    CurveBase,
    CurveFloat,
    CurveVector,
    CurveLinearColor,
    CurveTable,
    UserDefinedEnum,
    UserDefinedStruct,
    // Levels, UI and AI
    World,
    Font,
    LevelSequence,
    BehaviorTree,
    BlackboardData,
    EnvQuery,
}

impl TypeTag {
    /// Parse a host type name. Case-sensitive, like the host's class names.
    pub fn parse_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.name() == s)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        TypeTag::parse_str(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown asset type '{name}'")))
    }
}
