use factory_link::{ create_factory_using_configuration, BindError, FactoryError, FileBasedLocatorDescriptor, LocatorDescriptor };
use tokio_util::sync::CancellationToken ;
use crate::fixtures::{ EchoParameters, ARTIFACT_ID, echo_catalog };

async fn bind_inline( contents: &str ) -> FactoryError {

	let catalog = echo_catalog();
	let descriptor = FileBasedLocatorDescriptor::new( LocatorDescriptor::new( ARTIFACT_ID ))
		.with_config_file_contents( contents );

	match create_factory_using_configuration::<String>( &descriptor, Some( &catalog ), CancellationToken::new(), None ).await {
		Err( err ) => err,
		Ok( _ ) => panic!( "Expected failure" ),
	}

}

#[tokio::test]
async fn malformed_configuration_not_json() {
	match bind_inline( "prefix = inline" ).await {
		FactoryError::Binding( BindError::Parse( _ )) => {},
		err => panic!( "Unexpected error: {}", err ),
	}
}

#[tokio::test]
async fn malformed_configuration_wrong_shape() {
	match bind_inline( r#"{ "suffix": 3 }"# ).await {
		FactoryError::Binding( BindError::Deserialize { type_name, .. }) => assert_eq!( type_name, std::any::type_name::<EchoParameters>() ),
		err => panic!( "Unexpected error: {}", err ),
	}
}
