// @generated
// Generated from: proto/bank/v1/bank.proto
// Manual check-in for offline builds.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BalanceRequest {
    #[prost(string, tag = "1")]
    pub wallet_id: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct BalanceResponse {
    #[prost(int32, tag = "1")]
    pub balance: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaymentOrderRequest {
    #[prost(string, tag = "1")]
    pub wallet_id: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub amount: i32,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct OrderResponse {
    #[prost(int32, tag = "1")]
    pub status: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferRequest {
    #[prost(int32, tag = "1")]
    pub order_id: i32,
    #[prost(int32, tag = "2")]
    pub confirmation_amount: i32,
    #[prost(string, tag = "3")]
    pub wallet_id: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct TransferResponse {
    #[prost(int32, tag = "1")]
    pub status: i32,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct EndExecutionRequest {}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct EndExecutionResponse {
    #[prost(int32, tag = "1")]
    pub pending_orders: i32,
}

pub mod bank_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct BankClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl BankClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> BankClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn get_balance(
            &mut self,
            request: impl tonic::IntoRequest<super::BalanceRequest>,
        ) -> Result<tonic::Response<super::BalanceResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/bank.v1.Bank/GetBalance",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn create_payment_order(
            &mut self,
            request: impl tonic::IntoRequest<super::PaymentOrderRequest>,
        ) -> Result<tonic::Response<super::OrderResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/bank.v1.Bank/CreatePaymentOrder",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn transfer(
            &mut self,
            request: impl tonic::IntoRequest<super::TransferRequest>,
        ) -> Result<tonic::Response<super::TransferResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/bank.v1.Bank/Transfer",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn end_execution(
            &mut self,
            request: impl tonic::IntoRequest<super::EndExecutionRequest>,
        ) -> Result<tonic::Response<super::EndExecutionResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/bank.v1.Bank/EndExecution",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod bank_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait Bank: Send + Sync + 'static {
        async fn get_balance(
            &self,
            request: tonic::Request<super::BalanceRequest>,
        ) -> Result<tonic::Response<super::BalanceResponse>, tonic::Status>;
        async fn create_payment_order(
            &self,
            request: tonic::Request<super::PaymentOrderRequest>,
        ) -> Result<tonic::Response<super::OrderResponse>, tonic::Status>;
        async fn transfer(
            &self,
            request: tonic::Request<super::TransferRequest>,
        ) -> Result<tonic::Response<super::TransferResponse>, tonic::Status>;
        async fn end_execution(
            &self,
            request: tonic::Request<super::EndExecutionRequest>,
        ) -> Result<tonic::Response<super::EndExecutionResponse>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct BankServer<T: Bank> {
        inner: Arc<T>,
    }

    impl<T: Bank> BankServer<T> {
        pub fn new(inner: T) -> Self {
            Self {
                inner: Arc::new(inner),
            }
        }
    }

    impl<T: Bank> Clone for BankServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }

    impl<T: Bank> Service<http::Request<tonic::body::BoxBody>> for BankServer<T> {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<tonic::body::BoxBody>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/bank.v1.Bank/GetBalance" => {
                    struct GetBalanceSvc<T: Bank>(pub Arc<T>);
                    impl<T: Bank> tonic::server::UnaryService<super::BalanceRequest> for GetBalanceSvc<T> {
                        type Response = super::BalanceResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::BalanceRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_balance(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetBalanceSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/bank.v1.Bank/CreatePaymentOrder" => {
                    struct CreatePaymentOrderSvc<T: Bank>(pub Arc<T>);
                    impl<T: Bank> tonic::server::UnaryService<super::PaymentOrderRequest> for CreatePaymentOrderSvc<T> {
                        type Response = super::OrderResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::PaymentOrderRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.create_payment_order(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = CreatePaymentOrderSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/bank.v1.Bank/Transfer" => {
                    struct TransferSvc<T: Bank>(pub Arc<T>);
                    impl<T: Bank> tonic::server::UnaryService<super::TransferRequest> for TransferSvc<T> {
                        type Response = super::TransferResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::TransferRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.transfer(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = TransferSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/bank.v1.Bank/EndExecution" => {
                    struct EndExecutionSvc<T: Bank>(pub Arc<T>);
                    impl<T: Bank> tonic::server::UnaryService<super::EndExecutionRequest> for EndExecutionSvc<T> {
                        type Response = super::EndExecutionResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::EndExecutionRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.end_execution(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = EndExecutionSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::empty_body())
                        .unwrap())
                }),
            }
        }
    }

    impl<T: Bank> tonic::server::NamedService for BankServer<T> {
        const NAME: &'static str = "bank.v1.Bank";
    }
}
