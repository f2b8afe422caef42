use factory_link::{ acquire_provider, LocatorDescriptor };
use tokio_util::sync::CancellationToken ;
use crate::fixtures::{ EchoParameters, ARTIFACT_ID, echo_catalog };

#[tokio::test]
async fn acquire_provider_single_candidate() {

	let catalog = echo_catalog();
	let descriptor = LocatorDescriptor::new( ARTIFACT_ID );

	let provider = match acquire_provider( &descriptor, Some( &catalog ), CancellationToken::new() ).await {
		Ok( provider ) => provider,
		Err( diagnostic ) => panic!( "{}", diagnostic ),
	};

	assert_eq!( provider.parameter_shape().type_name(), std::any::type_name::<EchoParameters>() );

}
