//! Handle capabilities.
//!
//! A handle is a deferred lookup of a class or member in the runtime type
//! system. The parser only writes to handles, and only through the
//! capabilities a handle's kind exposes:
//!
//! ```text
//! NamedHandle ─┬─ ClassHandle
//!              │
//! MemberHandle ┼─ NamedMemberHandle ─┬─ FieldHandle
//!              │                     └─ MethodHandle
//!              └─ ConstructorHandle
//! ```

use xreflect_foundation::Type;

/// A handle addressed by name segments (`["Map", "Entry"]` for `Map$Entry`).
pub trait NamedHandle {
    /// Sets the name segments.
    fn named(&mut self, segments: Vec<String>);
}

/// A handle to a class or interface.
pub trait ClassHandle: NamedHandle {
    /// Sets the package the class lives in.
    fn in_package(&mut self, package: String);
}

/// A handle to a member of a class.
pub trait MemberHandle {
    /// Requests access to a non-public member.
    fn make_accessible(&mut self);
}

/// A member handle that is looked up by name.
pub trait NamedMemberHandle: MemberHandle + NamedHandle {
    /// Marks the member as static.
    fn as_static(&mut self);
}

/// A handle to a field.
pub trait FieldHandle: NamedMemberHandle {
    /// Sets the field type.
    fn returns(&mut self, ty: Type);

    /// Marks the field as final.
    fn as_final(&mut self);
}

/// A handle to a method.
pub trait MethodHandle: NamedMemberHandle {
    /// Sets the return type.
    fn returns(&mut self, ty: Type);

    /// Sets the parameter types, in order.
    fn parameters(&mut self, types: Vec<Type>);
}

/// A handle to a constructor.
pub trait ConstructorHandle: MemberHandle {
    /// Sets the parameter types, in order.
    fn parameters(&mut self, types: Vec<Type>);
}

impl<H: NamedHandle + ?Sized> NamedHandle for &mut H {
    fn named(&mut self, segments: Vec<String>) {
        (**self).named(segments);
    }
}

impl<H: ClassHandle + ?Sized> ClassHandle for &mut H {
    fn in_package(&mut self, package: String) {
        (**self).in_package(package);
    }
}

impl<H: MemberHandle + ?Sized> MemberHandle for &mut H {
    fn make_accessible(&mut self) {
        (**self).make_accessible();
    }
}

impl<H: NamedMemberHandle + ?Sized> NamedMemberHandle for &mut H {
    fn as_static(&mut self) {
        (**self).as_static();
    }
}

impl<H: FieldHandle + ?Sized> FieldHandle for &mut H {
    fn returns(&mut self, ty: Type) {
        (**self).returns(ty);
    }

    fn as_final(&mut self) {
        (**self).as_final();
    }
}

impl<H: MethodHandle + ?Sized> MethodHandle for &mut H {
    fn returns(&mut self, ty: Type) {
        (**self).returns(ty);
    }

    fn parameters(&mut self, types: Vec<Type>) {
        (**self).parameters(types);
    }
}

impl<H: ConstructorHandle + ?Sized> ConstructorHandle for &mut H {
    fn parameters(&mut self, types: Vec<Type>) {
        (**self).parameters(types);
    }
}
