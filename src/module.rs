//! The queryable representation of a loaded module.
//!
//! A [`Module`] is what a [`ModuleLoader`]( crate::ModuleLoader ) hands back for an
//! artifact. It exposes the types the module declares in declaration order, lets
//! them be looked up by name, and describes their ancestry ( base type and
//! implemented contracts ) so that contract satisfaction can be decided without any
//! runtime reflection.
//!
//! Types the module only references ( for instance a contract declared by a
//! dependency module ) can be registered too. They never become candidates but take
//! part in ancestry walks.
//!
//! Instantiation goes through a constructor registry populated while the module is
//! built: every constructible type is registered with a parameterless constructor.

use std::collections::HashMap ;
use std::sync::Arc ;

use crate::{ BoxError, ModuleIdentity, ResourceFactoryProvider, TypeIdentity };



/// A registered parameterless constructor.
pub type Constructor = Arc<dyn Fn() -> Result<Box<dyn ResourceFactoryProvider>, BoxError> + Send + Sync>;

/// Whether a type is visible outside of its module.
#[derive( Copy, Clone, Debug, Default, PartialEq, Eq, Hash )]
pub enum Visibility {
	#[default] Public,
	Internal,
}

/// What kind of type a [`TypeDescriptor`] describes.
#[derive( Copy, Clone, Debug, Default, PartialEq, Eq, Hash )]
pub enum TypeKind {
	/// A type that can be instantiated.
	#[default] Concrete,
	/// A type that has to be derived from before it can be instantiated.
	Abstract,
	/// A contract. Contracts are implemented, never instantiated.
	Contract,
}

/// Describes a single type: its identity, visibility, kind and direct ancestry.
#[derive( Clone, Debug, PartialEq, Eq )]
pub struct TypeDescriptor {
	identity: TypeIdentity,
	visibility: Visibility,
	kind: TypeKind,
	base_type: Option<TypeIdentity>,
	contracts: Vec<TypeIdentity>,
}

impl TypeDescriptor {

	/// Describes a public type of the given kind with no ancestry.
	pub fn new( identity: TypeIdentity, kind: TypeKind ) -> Self {
		Self {
			identity,
			visibility: Visibility::Public,
			kind,
			base_type: None,
			contracts: Vec::with_capacity( 0 ),
		}
	}

	/// Describes a public concrete type.
	pub fn concrete( identity: TypeIdentity ) -> Self { Self::new( identity, TypeKind::Concrete )}

	/// Describes a contract.
	pub fn contract( identity: TypeIdentity ) -> Self { Self::new( identity, TypeKind::Contract )}

	/// Sets the visibility.
	pub fn with_visibility( mut self, visibility: Visibility ) -> Self {
		self.visibility = visibility ;
		self
	}

	/// Sets the base type.
	pub fn with_base_type( mut self, base_type: TypeIdentity ) -> Self {
		self.base_type = Some( base_type );
		self
	}

	/// Adds a directly implemented ( or, for contracts, extended ) contract.
	pub fn implementing( mut self, contract: TypeIdentity ) -> Self {
		self.contracts.push( contract );
		self
	}

	#[inline] pub fn identity( &self ) -> &TypeIdentity { &self.identity }
	#[inline] pub fn visibility( &self ) -> Visibility { self.visibility }
	#[inline] pub fn kind( &self ) -> TypeKind { self.kind }
	#[inline] pub fn base_type( &self ) -> Option<&TypeIdentity> { self.base_type.as_ref() }
	#[inline] pub fn contracts( &self ) -> &[TypeIdentity] { &self.contracts }

	/// Public, concrete types are the only ones considered when searching a module
	/// for an implementation.
	pub fn is_candidate( &self ) -> bool {
		self.visibility == Visibility::Public && self.kind == TypeKind::Concrete
	}

}

/// A loaded module.
///
/// Built with [`Module::builder`]. Immutable once built, so loaders are free to cache
/// and share it.
pub struct Module {
	identity: ModuleIdentity,
	declared: Vec<TypeDescriptor>,
	declared_index: HashMap<TypeIdentity, usize>,
	referenced: HashMap<TypeIdentity, TypeDescriptor>,
	constructors: HashMap<TypeIdentity, Constructor>,
}

impl Module {

	/// Starts building a module with the given identity.
	pub fn builder( identity: ModuleIdentity ) -> ModuleBuilder {
		ModuleBuilder {
			module: Self {
				identity,
				declared: Vec::new(),
				declared_index: HashMap::new(),
				referenced: HashMap::new(),
				constructors: HashMap::new(),
			}
		}
	}

	#[inline] pub fn identity( &self ) -> &ModuleIdentity { &self.identity }

	/// Types declared by this module, in declaration order.
	pub fn types( &self ) -> impl Iterator<Item = &TypeDescriptor> { self.declared.iter() }

	/// The first declared type whose namespace-qualified name is exactly `full_name`.
	pub fn get_type( &self, full_name: &str ) -> Option<&TypeDescriptor> {
		self.declared.iter().find(| descriptor | descriptor.identity().full_name() == full_name )
	}

	/// Describes a type known to this module, whether declared or referenced.
	pub fn describe( &self, identity: &TypeIdentity ) -> Option<&TypeDescriptor> {
		self.declared_index.get( identity )
			.map(| index | &self.declared[*index] )
			.or_else(|| self.referenced.get( identity ))
	}

	/// The constructor registered for a declared type.
	pub fn constructor( &self, identity: &TypeIdentity ) -> Option<&Constructor> {
		self.constructors.get( identity )
	}

}

impl std::fmt::Debug for Module {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Module" )
			.field( "identity", &self.identity )
			.field( "declared", &self.declared )
			.field( "referenced", &self.referenced.keys().collect::<Vec<_>>() )
			.field( "constructors", &self.constructors.keys().collect::<Vec<_>>() )
			.finish()
	}
}

impl std::fmt::Display for Module {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		std::fmt::Display::fmt( &self.identity, f )
	}
}

/// Populates a [`Module`] at load time.
#[must_use = "call .build() to obtain the Module"]
pub struct ModuleBuilder {
	module: Module,
}

impl ModuleBuilder {

	/// Declares a type without a constructor. Such a type can still be found by the
	/// resolver, but instantiating it fails.
	pub fn declare( mut self, descriptor: TypeDescriptor ) -> Self {
		let index = self.module.declared.len();
		self.module.declared_index.entry( descriptor.identity().clone() ).or_insert( index );
		self.module.declared.push( descriptor );
		self
	}

	/// Declares a type along with its parameterless constructor.
	pub fn declare_constructible<P, E, F>( self, descriptor: TypeDescriptor, constructor: F ) -> Self
	where
		P: ResourceFactoryProvider + 'static,
		E: Into<BoxError>,
		F: Fn() -> Result<P, E> + Send + Sync + 'static,
	{
		let identity = descriptor.identity().clone();
		let mut builder = self.declare( descriptor );
		let constructor: Constructor = Arc::new( move || constructor()
			.map(| provider | Box::new( provider ) as Box<dyn ResourceFactoryProvider> )
			.map_err( Into::<BoxError>::into )
		);
		builder.module.constructors.entry( identity ).or_insert( constructor );
		builder
	}

	/// Declares a type constructed through its [`Default`] implementation.
	pub fn declare_default<P>( self, descriptor: TypeDescriptor ) -> Self
	where
		P: ResourceFactoryProvider + Default + 'static,
	{
		self.declare_constructible( descriptor, || Ok::<_, BoxError>( P::default() ))
	}

	/// Registers a type declared by another module that this module's types derive from
	/// or implement.
	pub fn reference( mut self, descriptor: TypeDescriptor ) -> Self {
		self.module.referenced.insert( descriptor.identity().clone(), descriptor );
		self
	}

	pub fn build( self ) -> Module { self.module }

}
