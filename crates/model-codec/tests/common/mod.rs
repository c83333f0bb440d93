//! Hand-written stand-ins for generated models, shared by the matrices.

#![allow(dead_code)]

use std::sync::LazyLock;
use std::time::Duration;

use indexmap::IndexMap;
use json_model_codec::{
    decode_enum, encode_enum, CodecError, DiscriminatorRegistry, DomainPolicy, EnumDomain,
    JsonCodec, NullableValue, ObjectShape, OptionalValue, ScalarEnum, ScalarEnumCodec,
    TrialUnionDecoder, UnionValue, Variant, VariantDescriptor,
};
use serde_json::Value;

macro_rules! shape_codec {
    ($ty:ty, $shape:ident) => {
        impl JsonCodec for $ty {
            fn encode_json(&self) -> Result<Value, CodecError> {
                $shape.encode(self)
            }

            fn decode_json(value: &Value) -> Result<Self, CodecError> {
                $shape.decode(value)
            }
        }
    };
}

macro_rules! enum_codec {
    ($ty:ty) => {
        impl JsonCodec for $ty {
            fn encode_json(&self) -> Result<Value, CodecError> {
                encode_enum(self)
            }

            fn decode_json(value: &Value) -> Result<Self, CodecError> {
                decode_enum(value)
            }
        }
    };
}

// ---------------------------------------------------------------- enums

/// Lenient number enum with literals 4 and 2.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberNoScalar(pub i64);

impl NumberNoScalar {
    pub const VARIANT1: Self = Self(4);
    pub const VARIANT2: Self = Self(2);
}

static NUMBER_NO_SCALAR: LazyLock<ScalarEnumCodec<i64>> = LazyLock::new(|| {
    ScalarEnumCodec::new(EnumDomain::new(
        "NumberNoScalar",
        [NumberNoScalar::VARIANT1.0, NumberNoScalar::VARIANT2.0],
    ))
});

impl ScalarEnum for NumberNoScalar {
    type Scalar = i64;

    fn codec() -> &'static ScalarEnumCodec<i64> {
        &NUMBER_NO_SCALAR
    }

    fn from_scalar(scalar: i64) -> Self {
        Self(scalar)
    }

    fn as_scalar(&self) -> &i64 {
        &self.0
    }
}

enum_codec!(NumberNoScalar);

/// Strict string enum.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Size(pub String);

impl Size {
    pub fn small() -> Self {
        Self("small".into())
    }

    pub fn large() -> Self {
        Self("large".into())
    }
}

static SIZE: LazyLock<ScalarEnumCodec<String>> = LazyLock::new(|| {
    ScalarEnumCodec::new(
        EnumDomain::new("Size", ["small".to_string(), "large".to_string()])
            .with_policy(DomainPolicy::Strict),
    )
});

impl ScalarEnum for Size {
    type Scalar = String;

    fn codec() -> &'static ScalarEnumCodec<String> {
        &SIZE
    }

    fn from_scalar(scalar: String) -> Self {
        Self(scalar)
    }

    fn as_scalar(&self) -> &String {
        &self.0
    }
}

enum_codec!(Size);

/// Lenient string enum used as an open-union candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct MetalStringValues(pub String);

static METAL_STRING_VALUES: LazyLock<ScalarEnumCodec<String>> = LazyLock::new(|| {
    ScalarEnumCodec::new(EnumDomain::new(
        "MetalStringValues",
        ["iron".to_string(), "silver".to_string()],
    ))
});

impl ScalarEnum for MetalStringValues {
    type Scalar = String;

    fn codec() -> &'static ScalarEnumCodec<String> {
        &METAL_STRING_VALUES
    }

    fn from_scalar(scalar: String) -> Self {
        Self(scalar)
    }

    fn as_scalar(&self) -> &String {
        &self.0
    }
}

enum_codec!(MetalStringValues);

// ---------------------------------------------------------------- models

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pet {
    pub name: String,
    pub age: i64,
    pub nickname: OptionalValue<String>,
    pub owner: NullableValue<String>,
    pub tags: Vec<String>,
}

pub static PET: LazyLock<ObjectShape<Pet>> = LazyLock::new(|| {
    ObjectShape::builder("Pet")
        .field("name", |p: &Pet| &p.name, |p: &mut Pet| &mut p.name)
        .field("age", |p: &Pet| &p.age, |p: &mut Pet| &mut p.age)
        .optional("nickname", |p: &Pet| &p.nickname, |p: &mut Pet| &mut p.nickname)
        .nullable("owner", |p: &Pet| &p.owner, |p: &mut Pet| &mut p.owner)
        .field("tags", |p: &Pet| &p.tags, |p: &mut Pet| &mut p.tags)
        .build()
});

shape_codec!(Pet, PET);

/// Wire names differ from the Rust field names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cat {
    pub name: String,
    pub lives: u8,
}

pub static CAT: LazyLock<ObjectShape<Cat>> = LazyLock::new(|| {
    ObjectShape::builder("Cat")
        .field("catName", |c: &Cat| &c.name, |c: &mut Cat| &mut c.name)
        .field("livesLeft", |c: &Cat| &c.lives, |c: &mut Cat| &mut c.lives)
        .build()
});

shape_codec!(Cat, CAT);

/// Inherits every `Pet` field, overrides `age`, adds a literal and a breed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dog {
    pub pet: Pet,
    pub age: u8,
    pub breed: OptionalValue<String>,
}

pub static DOG: LazyLock<ObjectShape<Dog>> = LazyLock::new(|| {
    ObjectShape::builder("Dog")
        .extends(&PET, |d: &Dog| &d.pet, |d: &mut Dog| &mut d.pet)
        .constant("species", "dog")
        .field("age", |d: &Dog| &d.age, |d: &mut Dog| &mut d.age)
        .optional("breed", |d: &Dog| &d.breed, |d: &mut Dog| &mut d.breed)
        .build()
});

shape_codec!(Dog, DOG);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Home {
    pub address: String,
    pub dog: OptionalValue<Dog>,
    pub rooms: IndexMap<String, Room>,
}

pub static HOME: LazyLock<ObjectShape<Home>> = LazyLock::new(|| {
    ObjectShape::builder("Home")
        .field("address", |h: &Home| &h.address, |h: &mut Home| &mut h.address)
        .optional("dog", |h: &Home| &h.dog, |h: &mut Home| &mut h.dog)
        .field("rooms", |h: &Home| &h.rooms, |h: &mut Home| &mut h.rooms)
        .build()
});

shape_codec!(Home, HOME);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HasScalarNullable {
    pub scalar_nullable_field: NullableValue<String>,
}

pub static HAS_SCALAR_NULLABLE: LazyLock<ObjectShape<HasScalarNullable>> = LazyLock::new(|| {
    ObjectShape::builder("HasScalarNullable")
        .nullable(
            "scalarNullableField",
            |h: &HasScalarNullable| &h.scalar_nullable_field,
            |h: &mut HasScalarNullable| &mut h.scalar_nullable_field,
        )
        .build()
});

shape_codec!(HasScalarNullable, HAS_SCALAR_NULLABLE);

/// Fields shared by every box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxBase {
    pub label: OptionalValue<String>,
}

pub static BOX_BASE: LazyLock<ObjectShape<BoxBase>> = LazyLock::new(|| {
    ObjectShape::builder("Box")
        .optional("label", |b: &BoxBase| &b.label, |b: &mut BoxBase| &mut b.label)
        .build()
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmallBox {
    pub base: BoxBase,
}

pub static SMALL_BOX: LazyLock<ObjectShape<SmallBox>> = LazyLock::new(|| {
    ObjectShape::builder("SmallBox")
        .extends(&BOX_BASE, |b: &SmallBox| &b.base, |b: &mut SmallBox| &mut b.base)
        .build()
});

shape_codec!(SmallBox, SMALL_BOX);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LargeBox {
    pub base: BoxBase,
    pub size: Size,
}

pub static LARGE_BOX: LazyLock<ObjectShape<LargeBox>> = LazyLock::new(|| {
    ObjectShape::builder("LargeBox")
        .extends(&BOX_BASE, |b: &LargeBox| &b.base, |b: &mut LargeBox| &mut b.base)
        .field("size", |b: &LargeBox| &b.size, |b: &mut LargeBox| &mut b.size)
        .build()
});

shape_codec!(LargeBox, LARGE_BOX);

/// Closed union over the box subtypes, tagged by `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBox {
    Small(SmallBox),
    Large(LargeBox),
}

impl Default for StorageBox {
    fn default() -> Self {
        Self::Small(SmallBox::default())
    }
}

impl Variant for StorageBox {
    fn tag(&self) -> &str {
        match self {
            Self::Small(_) => "small",
            Self::Large(_) => "large",
        }
    }
}

pub static BOXES: LazyLock<DiscriminatorRegistry<StorageBox>> = LazyLock::new(|| {
    DiscriminatorRegistry::builder("Box", "type")
        .register(
            "small",
            VariantDescriptor::new(StorageBox::Small, |b: &StorageBox| match b {
                StorageBox::Small(v) => Some(v),
                _ => None,
            }),
        )
        .register(
            "large",
            VariantDescriptor::new(StorageBox::Large, |b: &StorageBox| match b {
                StorageBox::Large(v) => Some(v),
                _ => None,
            }),
        )
        .build()
        .expect("Box registry")
});

impl JsonCodec for StorageBox {
    fn encode_json(&self) -> Result<Value, CodecError> {
        BOXES.encode(self)
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        BOXES.decode(value).map(UnionValue::into_inner)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Storage {
    pub storage_box: StorageBox,
}

pub static STORAGE: LazyLock<ObjectShape<Storage>> = LazyLock::new(|| {
    ObjectShape::builder("Storage")
        .field("box", |s: &Storage| &s.storage_box, |s: &mut Storage| &mut s.storage_box)
        .build()
});

shape_codec!(Storage, STORAGE);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meeting {
    pub title: String,
    pub duration: Duration,
    pub reminder: OptionalValue<Duration>,
}

pub static MEETING: LazyLock<ObjectShape<Meeting>> = LazyLock::new(|| {
    ObjectShape::builder("Meeting")
        .field("title", |m: &Meeting| &m.title, |m: &mut Meeting| &mut m.title)
        .field("duration", |m: &Meeting| &m.duration, |m: &mut Meeting| &mut m.duration)
        .optional("reminder", |m: &Meeting| &m.reminder, |m: &mut Meeting| &mut m.reminder)
        .build()
});

shape_codec!(Meeting, MEETING);

// ---------------------------------------------------------------- closed unions

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolarBear {
    pub size: Size,
}

pub static POLAR_BEAR: LazyLock<ObjectShape<PolarBear>> = LazyLock::new(|| {
    ObjectShape::builder("PolarBear")
        .field("size", |b: &PolarBear| &b.size, |b: &mut PolarBear| &mut b.size)
        .build()
});

shape_codec!(PolarBear, POLAR_BEAR);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrizzlyBear {
    pub size: String,
    pub region: NullableValue<String>,
}

pub static GRIZZLY_BEAR: LazyLock<ObjectShape<GrizzlyBear>> = LazyLock::new(|| {
    ObjectShape::builder("GrizzlyBear")
        .field("size", |b: &GrizzlyBear| &b.size, |b: &mut GrizzlyBear| &mut b.size)
        .nullable("region", |b: &GrizzlyBear| &b.region, |b: &mut GrizzlyBear| &mut b.region)
        .build()
});

shape_codec!(GrizzlyBear, GRIZZLY_BEAR);

#[derive(Debug, Clone, PartialEq)]
pub enum Bear {
    Polar(PolarBear),
    Grizzly(GrizzlyBear),
}

impl Variant for Bear {
    fn tag(&self) -> &str {
        match self {
            Self::Polar(_) => "polar",
            Self::Grizzly(_) => "grizzly",
        }
    }
}

pub static BEARS: LazyLock<DiscriminatorRegistry<Bear>> = LazyLock::new(|| {
    DiscriminatorRegistry::builder("Bear", "type")
        .register(
            "polar",
            VariantDescriptor::new(Bear::Polar, |b: &Bear| match b {
                Bear::Polar(v) => Some(v),
                _ => None,
            }),
        )
        .register(
            "grizzly",
            VariantDescriptor::new(Bear::Grizzly, |b: &Bear| match b {
                Bear::Grizzly(v) => Some(v),
                _ => None,
            }),
        )
        .build()
        .expect("Bear registry")
});

impl JsonCodec for Bear {
    fn encode_json(&self) -> Result<Value, CodecError> {
        BEARS.encode(self)
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        BEARS.decode(value).map(UnionValue::into_inner)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chair {
    pub legs: i64,
}

pub static CHAIR: LazyLock<ObjectShape<Chair>> = LazyLock::new(|| {
    ObjectShape::builder("Chair")
        .field("legs", |c: &Chair| &c.legs, |c: &mut Chair| &mut c.legs)
        .build()
});

shape_codec!(Chair, CHAIR);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bench {
    pub length: f64,
    pub seats: i64,
}

pub static BENCH: LazyLock<ObjectShape<Bench>> = LazyLock::new(|| {
    ObjectShape::builder("Bench")
        .field("length", |b: &Bench| &b.length, |b: &mut Bench| &mut b.length)
        .field("seats", |b: &Bench| &b.seats, |b: &mut Bench| &mut b.seats)
        .build()
});

shape_codec!(Bench, BENCH);

#[derive(Debug, Clone, PartialEq)]
pub enum Seating {
    Chair(Chair),
    Bench(Bench),
}

impl Variant for Seating {
    fn tag(&self) -> &str {
        match self {
            Self::Chair(_) => "chair",
            Self::Bench(_) => "bench",
        }
    }
}

pub static SEATING: LazyLock<DiscriminatorRegistry<Seating>> = LazyLock::new(|| {
    DiscriminatorRegistry::builder("Seating", "kind")
        .register(
            "chair",
            VariantDescriptor::new(Seating::Chair, |s: &Seating| match s {
                Seating::Chair(v) => Some(v),
                _ => None,
            }),
        )
        .register(
            "bench",
            VariantDescriptor::new(Seating::Bench, |s: &Seating| match s {
                Seating::Bench(v) => Some(v),
                _ => None,
            }),
        )
        .build()
        .expect("Seating registry")
});

impl JsonCodec for Seating {
    fn encode_json(&self) -> Result<Value, CodecError> {
        SEATING.encode(self)
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        SEATING.decode(value).map(UnionValue::into_inner)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    pub name: String,
    pub seating: Vec<Seating>,
}

pub static ROOM: LazyLock<ObjectShape<Room>> = LazyLock::new(|| {
    ObjectShape::builder("Room")
        .field("name", |r: &Room| &r.name, |r: &mut Room| &mut r.name)
        .field("seating", |r: &Room| &r.seating, |r: &mut Room| &mut r.seating)
        .build()
});

shape_codec!(Room, ROOM);

// ---------------------------------------------------------------- open unions

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alloy {
    pub name: String,
    pub percentage: f64,
}

pub static ALLOY: LazyLock<ObjectShape<Alloy>> = LazyLock::new(|| {
    ObjectShape::builder("Alloy")
        .field("name", |a: &Alloy| &a.name, |a: &mut Alloy| &mut a.name)
        .field("percentage", |a: &Alloy| &a.percentage, |a: &mut Alloy| &mut a.percentage)
        .build()
});

shape_codec!(Alloy, ALLOY);

#[derive(Debug, Clone, PartialEq)]
pub enum Metal {
    Alloy(Alloy),
    Pure(MetalStringValues),
}

impl Variant for Metal {
    fn tag(&self) -> &str {
        match self {
            Self::Alloy(_) => "Alloy",
            Self::Pure(_) => "MetalStringValues",
        }
    }
}

pub static METAL: LazyLock<TrialUnionDecoder<Metal>> = LazyLock::new(|| {
    TrialUnionDecoder::builder("Metal")
        .candidate(
            "Alloy",
            VariantDescriptor::new(Metal::Alloy, |m: &Metal| match m {
                Metal::Alloy(v) => Some(v),
                _ => None,
            }),
        )
        .candidate(
            "MetalStringValues",
            VariantDescriptor::new(Metal::Pure, |m: &Metal| match m {
                Metal::Pure(v) => Some(v),
                _ => None,
            }),
        )
        .build()
        .expect("Metal decoder")
});

impl JsonCodec for Metal {
    fn encode_json(&self) -> Result<Value, CodecError> {
        METAL.encode(self)
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        METAL.decode(value).map(UnionValue::into_inner)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundName {
    pub name: String,
    pub second_name: OptionalValue<String>,
}

pub static COMPOUND_NAME: LazyLock<ObjectShape<CompoundName>> = LazyLock::new(|| {
    ObjectShape::builder("CompoundName")
        .field("name", |n: &CompoundName| &n.name, |n: &mut CompoundName| &mut n.name)
        .optional(
            "secondName",
            |n: &CompoundName| &n.second_name,
            |n: &mut CompoundName| &mut n.second_name,
        )
        .build()
});

shape_codec!(CompoundName, COMPOUND_NAME);

#[derive(Debug, Clone, PartialEq)]
pub enum Name {
    Simple(String),
    Compound(CompoundName),
}

impl Variant for Name {
    fn tag(&self) -> &str {
        match self {
            Self::Simple(_) => "string",
            Self::Compound(_) => "CompoundName",
        }
    }
}

pub static NAME: LazyLock<TrialUnionDecoder<Name>> = LazyLock::new(|| {
    TrialUnionDecoder::builder("Name")
        .candidate(
            "string",
            VariantDescriptor::new(Name::Simple, |n: &Name| match n {
                Name::Simple(v) => Some(v),
                _ => None,
            }),
        )
        .candidate(
            "CompoundName",
            VariantDescriptor::new(Name::Compound, |n: &Name| match n {
                Name::Compound(v) => Some(v),
                _ => None,
            }),
        )
        .build()
        .expect("Name decoder")
});

impl JsonCodec for Name {
    fn encode_json(&self) -> Result<Value, CodecError> {
        NAME.encode(self)
    }

    fn decode_json(value: &Value) -> Result<Self, CodecError> {
        NAME.decode(value).map(UnionValue::into_inner)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub name: NullableValue<Name>,
    pub metals: Vec<Metal>,
}

pub static PERSON: LazyLock<ObjectShape<Person>> = LazyLock::new(|| {
    ObjectShape::builder("Person")
        .nullable("name", |p: &Person| &p.name, |p: &mut Person| &mut p.name)
        .field("metals", |p: &Person| &p.metals, |p: &mut Person| &mut p.metals)
        .build()
});

shape_codec!(Person, PERSON);
