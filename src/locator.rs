//! Descriptors of what to load.
//!
//! Both descriptors deserialize from ordinary configuration data, so they can be read
//! from the same file as the rest of an application's settings. Optional fields that
//! are present but empty are treated as absent.

use std::path::{ Path, PathBuf };
use serde::{ Deserialize, Serialize };



/// Describes which artifact to load and, optionally, which type inside it implements
/// the provider contract.
///
/// ```
/// use factory_link::LocatorDescriptor ;
///
/// let descriptor = LocatorDescriptor::new( "acme-pool-provider" )
/// 	.with_version( "1.2.0" )
/// 	.with_type_name( "acme.pool.PoolProvider" );
///
/// assert_eq!( descriptor.artifact_id(), "acme-pool-provider" );
/// assert_eq!( descriptor.in_artifact_path(), None );
/// ```
#[derive( Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize )]
pub struct LocatorDescriptor {
	/// Identity of the artifact holding the provider
	#[serde( default )]
	artifact_id: String,
	/// Version of the artifact; the loader picks the newest one when absent
	#[serde( default, skip_serializing_if = "Option::is_none" )]
	version: Option<String>,
	/// Path of the module inside the artifact, for artifacts holding more than one
	#[serde( default, skip_serializing_if = "Option::is_none" )]
	in_artifact_path: Option<String>,
	/// Namespace-qualified name of the provider type; every type is searched when absent
	#[serde( default, skip_serializing_if = "Option::is_none" )]
	type_name: Option<String>,
}

impl LocatorDescriptor {

	/// Creates a descriptor for the newest version of an artifact.
	pub fn new( artifact_id: impl Into<String> ) -> Self {
		Self { artifact_id: artifact_id.into(), ..Self::default() }
	}

	/// Pins the artifact version.
	pub fn with_version( mut self, version: impl Into<String> ) -> Self {
		self.version = Some( version.into() );
		self
	}

	/// Selects a module inside the artifact.
	pub fn with_in_artifact_path( mut self, path: impl Into<String> ) -> Self {
		self.in_artifact_path = Some( path.into() );
		self
	}

	/// Names the provider type explicitly.
	pub fn with_type_name( mut self, type_name: impl Into<String> ) -> Self {
		self.type_name = Some( type_name.into() );
		self
	}

	#[inline] pub fn artifact_id( &self ) -> &str { &self.artifact_id }
	#[inline] pub fn version( &self ) -> Option<&str> { non_empty( self.version.as_deref() )}
	#[inline] pub fn in_artifact_path( &self ) -> Option<&str> { non_empty( self.in_artifact_path.as_deref() )}
	#[inline] pub fn type_name( &self ) -> Option<&str> { non_empty( self.type_name.as_deref() )}

}

/// A [`LocatorDescriptor`] that also says where the provider's creation parameters are
/// stored: in a configuration file, or inline.
///
/// Inline contents take precedence over the file path; the file is not read when both
/// are set.
#[derive( Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize )]
pub struct FileBasedLocatorDescriptor {
	#[serde( flatten )]
	locator: LocatorDescriptor,
	#[serde( default, skip_serializing_if = "Option::is_none" )]
	config_file_path: Option<PathBuf>,
	#[serde( default, skip_serializing_if = "Option::is_none" )]
	config_file_contents: Option<String>,
}

impl FileBasedLocatorDescriptor {

	/// Wraps a locator with no configuration source set yet.
	pub fn new( locator: LocatorDescriptor ) -> Self {
		Self { locator, config_file_path: None, config_file_contents: None }
	}

	/// Reads the creation parameters from the file at `path`.
	pub fn with_config_file_path( mut self, path: impl Into<PathBuf> ) -> Self {
		self.config_file_path = Some( path.into() );
		self
	}

	/// Uses `contents` as the configuration file contents.
	pub fn with_config_file_contents( mut self, contents: impl Into<String> ) -> Self {
		self.config_file_contents = Some( contents.into() );
		self
	}

	#[inline] pub fn locator( &self ) -> &LocatorDescriptor { &self.locator }

	#[inline] pub fn config_file_path( &self ) -> Option<&Path> {
		self.config_file_path.as_deref().filter(| path | !path.as_os_str().is_empty())
	}

	#[inline] pub fn config_file_contents( &self ) -> Option<&str> {
		non_empty( self.config_file_contents.as_deref() )
	}

}

impl From<LocatorDescriptor> for FileBasedLocatorDescriptor {
	fn from( locator: LocatorDescriptor ) -> Self { Self::new( locator )}
}

impl AsRef<LocatorDescriptor> for FileBasedLocatorDescriptor {
	fn as_ref( &self ) -> &LocatorDescriptor { &self.locator }
}

#[inline] fn non_empty( value: Option<&str> ) -> Option<&str> {
	value.filter(| value | !value.is_empty())
}
