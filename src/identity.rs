//! Identity of modules and of the types they declare.
//!
//! A contract type may be loaded more than once: once by the host and once more,
//! transitively, by a provider module built against a different version of the
//! module declaring it. Strict equality ( the derived [`PartialEq`] ) tells those
//! copies apart; [`TypeIdentity::matches_ignoring_version`] treats them as the same
//! contract as long as everything but the version number agrees.

use itertools::Itertools ;



/// Identity of a loaded module: its simple name, its version and the token of the
/// key it was signed with.
///
/// An empty signing token means the module is unsigned. Two unsigned modules with the
/// same name are therefore considered the same module regardless of version.
#[derive( Clone, Debug, PartialEq, Eq, Hash )]
pub struct ModuleIdentity {
	name: String,
	version: String,
	signing_token: Vec<u8>,
}

impl ModuleIdentity {

	/// Creates a new module identity.
	pub fn new(
		name: impl Into<String>,
		version: impl Into<String>,
		signing_token: impl Into<Vec<u8>>,
	) -> Self {
		Self { name: name.into(), version: version.into(), signing_token: signing_token.into() }
	}

	/// Creates the identity of a module without a signing token.
	pub fn unsigned( name: impl Into<String>, version: impl Into<String> ) -> Self {
		Self::new( name, version, Vec::with_capacity( 0 ))
	}

	/// Simple name of the module.
	#[inline] pub fn name( &self ) -> &str { &self.name }

	/// Version of the module, exactly as the loader reported it.
	#[inline] pub fn version( &self ) -> &str { &self.version }

	/// Token of the signing key; empty when the module is unsigned.
	#[inline] pub fn signing_token( &self ) -> &[u8] { &self.signing_token }

	/// Returns `true` if both identities denote the same logical module: equal names and
	/// byte-equal signing tokens. The version is not compared.
	pub fn matches_ignoring_version( &self, other: &Self ) -> bool {
		self.name == other.name && self.signing_token == other.signing_token
	}

}

impl std::fmt::Display for ModuleIdentity {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		match self.signing_token.is_empty() {
			true => write!( f, "{}, Version={}, SigningToken=null", self.name, self.version ),
			false => write!( f, "{}, Version={}, SigningToken={}", self.name, self.version, hex::encode( &self.signing_token )),
		}
	}
}

/// Identity of a type: namespace, simple name and the module declaring it.
#[derive( Clone, Debug, PartialEq, Eq, Hash )]
pub struct TypeIdentity {
	namespace: String,
	name: String,
	module: ModuleIdentity,
}

impl TypeIdentity {

	/// Creates a new type identity. The namespace may be empty.
	pub fn new(
		namespace: impl Into<String>,
		name: impl Into<String>,
		module: ModuleIdentity,
	) -> Self {
		Self { namespace: namespace.into(), name: name.into(), module }
	}

	/// Namespace of the type, possibly empty.
	#[inline] pub fn namespace( &self ) -> &str { &self.namespace }

	/// Simple name of the type.
	#[inline] pub fn name( &self ) -> &str { &self.name }

	/// The module declaring the type.
	#[inline] pub fn module( &self ) -> &ModuleIdentity { &self.module }

	/// Namespace-qualified name, used for lookups by name within a module.
	pub fn full_name( &self ) -> String {
		[ self.namespace.as_str(), self.name.as_str() ].into_iter()
			.filter(| segment | !segment.is_empty())
			.join( "." )
	}

	/// Version-agnostic identity match.
	///
	/// Holds when the simple names, namespaces and declaring module names are equal and
	/// the declaring modules' signing tokens are byte-equal. Module versions may differ.
	pub fn matches_ignoring_version( &self, other: &Self ) -> bool {
		self.name == other.name
			&& self.namespace == other.namespace
			&& self.module.matches_ignoring_version( &other.module )
	}

}

impl std::fmt::Display for TypeIdentity {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		write!( f, "{}", self.full_name())
	}
}
