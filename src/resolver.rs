//! Finding the type that implements a contract.
//!
//! A candidate satisfies a contract when the contract shows up anywhere in its
//! ancestry, either as the very same type or as a copy of it loaded from another
//! version of the declaring module ( see [`TypeIdentity::matches_ignoring_version`] ).
//! The ancestry is walked depth-first, base type before implemented contracts, and
//! every type is visited at most once so malformed hierarchies cannot loop.

use std::collections::HashSet ;
use thiserror::Error ;

use crate::{ Module, ModuleIdentity, TypeDescriptor, TypeIdentity };



/// Reasons a module holds no usable implementation of a contract.
#[derive( Debug, Error )]
pub enum ResolveError {
	/// The explicitly named type is not declared by the module.
	#[error( "The type \"{type_name}\" could not be found in \"{module}\"." )]
	TypeNotFound { type_name: String, module: ModuleIdentity },
	/// The explicitly named type exists but does not implement the contract.
	#[error( "The type \"{type_name}\" in \"{module}\" does not have required parent type \"{contract}\"." )]
	MissingContract { type_name: String, module: ModuleIdentity, contract: TypeIdentity },
	/// No public concrete type of the module implements the contract.
	#[error( "Failed to find a type implementing \"{contract}\" within \"{module}\", try specifying the \"type_name\" locator parameter." )]
	NoCandidate { module: ModuleIdentity, contract: TypeIdentity },
}

/// Resolves the type implementing `contract` in `module`.
///
/// With an explicit `type_name`, that type is looked up by its namespace-qualified name
/// and checked against the contract. Without one, the first public concrete type in
/// declaration order that satisfies the contract wins.
///
/// # Errors
/// Returns a [`ResolveError`] describing why no type could be resolved.
pub fn resolve_type<'m>(
	module: &'m Module,
	contract: &TypeIdentity,
	type_name: Option<&str>,
) -> Result<&'m TypeDescriptor, ResolveError> {

	match type_name.filter(| name | !name.is_empty()) {
		Some( type_name ) => {
			let candidate = module.get_type( type_name ).ok_or_else(|| ResolveError::TypeNotFound {
				type_name: type_name.to_string(),
				module: module.identity().clone(),
			})?;
			match satisfies_contract( module, candidate, contract ) {
				true => Ok( candidate ),
				false => Err( ResolveError::MissingContract {
					type_name: candidate.identity().full_name(),
					module: module.identity().clone(),
					contract: contract.clone(),
				}),
			}
		},
		None => module.types()
			.filter(| candidate | candidate.is_candidate())
			.find(| candidate | satisfies_contract( module, candidate, contract ))
			.ok_or_else(|| ResolveError::NoCandidate {
				module: module.identity().clone(),
				contract: contract.clone(),
			}),
	}

}

/// Returns `true` if `candidate` is, derives from or implements `contract`, comparing
/// ancestors either strictly or version-agnostically.
///
/// Ancestors the module cannot describe are still compared, but their own ancestry is
/// not followed.
pub fn satisfies_contract( module: &Module, candidate: &TypeDescriptor, contract: &TypeIdentity ) -> bool {

	let mut visited = HashSet::new();
	let mut pending = vec![ candidate.identity() ];

	while let Some( current ) = pending.pop() {

		if !visited.insert( current ) { continue }

		if current == contract || current.matches_ignoring_version( contract ) { return true }

		if let Some( descriptor ) = module.describe( current ) {
			// Pushed in reverse so the base type is popped first.
			pending.extend( descriptor.contracts().iter().rev());
			pending.extend( descriptor.base_type());
		}

	}

	false

}
