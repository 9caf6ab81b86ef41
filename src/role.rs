//! Semantic roles and the operator capabilities they grant.
//!
//! Every [`MathArray`][crate::MathArray] carries a zero-sized role parameter. Roles decide which
//! element-wise operators are generated for an array: the generic operator impls require
//! `R: DefaultOp<Op, Operand>`, so a role that does not implement a combination is free to
//! supply its own operator for it (the matrix product, the Hamilton product, or the
//! point-minus-point difference that yields a vector).

/// A semantic role tag.
///
/// Roles are uninhabited types that only exist at the type level.
pub trait Role: 'static {}

/// Capability predicate: arrays with this role get the element-wise `Op` for `Operand`.
pub trait DefaultOp<Op, Operand>: Role {}

/// Roles whose arrays have a Euclidean norm (dot product, magnitude, normalization).
pub trait Euclidean: Role {}

/// Roles representing quaternions, which multiply with the Hamilton product.
pub trait Versor: Euclidean {}

/// `+` and `+=`.
pub enum AddOp {}
/// `-` and `-=`.
pub enum SubOp {}
/// `*` and `*=`.
pub enum MulOp {}
/// `/` and `/=`.
pub enum DivOp {}

/// The right-hand side is an array of the same shape and role.
pub enum ArrayRhs {}
/// The right-hand side is a scalar.
pub enum ScalarRhs {}
/// The left-hand side is a scalar.
pub enum ScalarLhs {}

/// Untagged numeric data.
pub enum Plain {}
/// A direction and magnitude.
pub enum Vector {}
/// A position.
pub enum Point {}
/// A linear map, multiplied with the matrix product.
pub enum Matrix {}
/// A general quaternion.
pub enum Quaternion {}
/// A unit quaternion used for rotations.
pub enum Rotor {}

impl Role for Plain {}
impl Role for Vector {}
impl Role for Point {}
impl Role for Matrix {}
impl Role for Quaternion {}
impl Role for Rotor {}

impl Euclidean for Vector {}
impl Euclidean for Quaternion {}
impl Euclidean for Rotor {}

impl Versor for Quaternion {}
impl Versor for Rotor {}

macro_rules! grant {
    ($role:ty: $( ($op:ty, $operand:ty) ),+ $(,)?) => {
        $(
            impl DefaultOp<$op, $operand> for $role {}
        )+
    };
}

macro_rules! grant_scalar_ops {
    ($($role:ty),+) => {
        $(
            grant!($role:
                (AddOp, ScalarRhs), (SubOp, ScalarRhs), (MulOp, ScalarRhs), (DivOp, ScalarRhs),
                (AddOp, ScalarLhs), (SubOp, ScalarLhs), (MulOp, ScalarLhs), (DivOp, ScalarLhs),
            );
        )+
    };
}

grant_scalar_ops!(Plain, Vector, Point, Matrix, Quaternion, Rotor);

grant!(Plain: (AddOp, ArrayRhs), (SubOp, ArrayRhs), (MulOp, ArrayRhs), (DivOp, ArrayRhs));
grant!(Vector: (AddOp, ArrayRhs), (SubOp, ArrayRhs), (MulOp, ArrayRhs), (DivOp, ArrayRhs));
grant!(Point: (AddOp, ArrayRhs), (MulOp, ArrayRhs), (DivOp, ArrayRhs));
grant!(Matrix: (AddOp, ArrayRhs), (SubOp, ArrayRhs), (DivOp, ArrayRhs));
grant!(Quaternion: (AddOp, ArrayRhs), (SubOp, ArrayRhs), (DivOp, ArrayRhs));
grant!(Rotor: (AddOp, ArrayRhs), (SubOp, ArrayRhs), (DivOp, ArrayRhs));
