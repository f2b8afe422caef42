use factory_link::{ create_factory_using_configuration, BindError, FactoryError, FileBasedLocatorDescriptor, LocatorDescriptor };
use tokio_util::sync::CancellationToken ;
use crate::fixtures::{ ARTIFACT_ID, echo_catalog };

async fn expect_missing_source( descriptor: FileBasedLocatorDescriptor ) {

	let catalog = echo_catalog();

	match create_factory_using_configuration::<String>( &descriptor, Some( &catalog ), CancellationToken::new(), None ).await {
		Err( err @ FactoryError::Binding( BindError::MissingConfigurationSource )) => {
			assert!( err.is_defect() );
			assert_eq!( err.to_string(), "Configuration file path was not provided." );
		},
		Err( err ) => panic!( "Unexpected error: {}", err ),
		Ok( _ ) => panic!( "Expected failure" ),
	}

}

#[tokio::test]
async fn missing_configuration_source() {
	expect_missing_source( FileBasedLocatorDescriptor::new( LocatorDescriptor::new( ARTIFACT_ID ))).await ;
}

#[tokio::test]
async fn missing_configuration_source_empty_values() {
	expect_missing_source( FileBasedLocatorDescriptor::new( LocatorDescriptor::new( ARTIFACT_ID ))
		.with_config_file_path( "" )
		.with_config_file_contents( "" )
	).await ;
}
