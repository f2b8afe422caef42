use factory_link::{ create_typed_factory, ConfigurationFileSource, Diagnostic, FactoryError, LocatorDescriptor };
use tokio_util::sync::CancellationToken ;
use crate::fixtures::{ ModuleCatalog, ARTIFACT_ID };

#[tokio::test]
async fn create_factory_missing_loader_is_unavailable() {

	let descriptor = LocatorDescriptor::new( ARTIFACT_ID );
	let source = ConfigurationFileSource::inline( r#"{ "prefix": "" }"# );

	match create_typed_factory::<String>( &descriptor, None, &source, CancellationToken::new() ).await {
		Err( err @ FactoryError::Unavailable( _ )) => {
			assert!( !err.is_defect() );
			assert_eq!( err.to_string(), Diagnostic::MissingLoader.to_string() );
		},
		Err( err ) => panic!( "Unexpected error: {}", err ),
		Ok( _ ) => panic!( "Expected failure" ),
	}

}

#[tokio::test]
async fn create_factory_module_not_found_is_unavailable() {

	let catalog = ModuleCatalog::new();
	let descriptor = LocatorDescriptor::new( ARTIFACT_ID );
	let source = ConfigurationFileSource::inline( r#"{ "prefix": "" }"# );

	match create_typed_factory::<String>( &descriptor, Some( &catalog ), &source, CancellationToken::new() ).await {
		Err( FactoryError::Unavailable( message )) => {
			let expected = Diagnostic::ModuleNotFound { artifact_id: ARTIFACT_ID.to_string() };
			assert_eq!( message, expected.to_string() );
		},
		Err( err ) => panic!( "Unexpected error: {}", err ),
		Ok( _ ) => panic!( "Expected failure" ),
	}

}
