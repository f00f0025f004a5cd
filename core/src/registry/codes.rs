//! # SERVICE CODE TABLE
//!
//! **CRITICAL**: The one canonical table of application codes.
//! **MANDATE**: Rows MUST stay in ascending code order; lookups binary-search this order.
//!
//! Each row is `Variant = (code, NAME, reason phrase, HttpStatus)`.

use crate::types::HttpStatus;

macro_rules! service_codes {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident = ($code:literal, $name:literal, $reason:literal, $status:ident),
        )+
    ) => {
        /// **SERVICE CODE**
        ///
        /// **PURPOSE**: Application level outcome carried in `api.response_code`
        /// **GUARANTEE**: Every variant has a unique code and a fixed transport status
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ServiceCode {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl ServiceCode {
            /// **ALL CODES** - Ascending by numeric code
            pub const ALL: &'static [ServiceCode] = &[$(ServiceCode::$variant,)+];

            /// **NUMERIC CODE**
            pub const fn code(self) -> u32 {
                match self {
                    $(ServiceCode::$variant => $code,)+
                }
            }

            /// **SYMBOLIC NAME** - Wire representation, e.g. `ENTITY_NOT_FOUND`
            pub const fn name(self) -> &'static str {
                match self {
                    $(ServiceCode::$variant => $name,)+
                }
            }

            /// **REASON PHRASE**
            pub const fn reason_phrase(self) -> &'static str {
                match self {
                    $(ServiceCode::$variant => $reason,)+
                }
            }

            /// **MAPPED TRANSPORT STATUS**
            pub const fn http_status(self) -> HttpStatus {
                match self {
                    $(ServiceCode::$variant => HttpStatus::$status,)+
                }
            }
        }
    };
}

service_codes! {
    // ============================================================================================
    // IN-PROGRESS AND IDEMPOTENT STATES (1xxx)
    // ============================================================================================
    CreationInProgress = (1010, "CREATION_IN_PROGRESS", "Creation In Progress", Processing),
    UploadingInProgress = (1020, "UPLOADING_IN_PROGRESS", "Uploading In Progress", Processing),
    DeletionInProgress = (1030, "DELETION_IN_PROGRESS", "Deletion In Progress", Processing),
    CopyingInProgress = (1040, "COPYING_IN_PROGRESS", "Copying In Progress", Processing),
    BatchProcessingInProgress = (1050, "BATCH_PROCESSING_IN_PROGRESS", "Batch Processing In Progress", Processing),
    CloningInProgress = (1060, "CLONING_IN_PROGRESS", "Cloning In Progress", Processing),
    SanitizationInProgress = (1070, "SANITIZATION_IN_PROGRESS", "Sanitization In Progress", Processing),
    LaunchInProgress = (1080, "LAUNCH_IN_PROGRESS", "Launch In Progress", Processing),
    JobInProgress = (1090, "JOB_IN_PROGRESS", "Job In Progress", Processing),
    AlreadyVerified = (1110, "ALREADY_VERIFIED", "Already Verified", Continue),
    AlreadyCreated = (1130, "ALREADY_CREATED", "Already Created", Continue),
    AlreadyDeleted = (1150, "ALREADY_DELETED", "Already Deleted", Continue),
    AlreadyUpdated = (1170, "ALREADY_UPDATED", "Already Updated", Continue),
    AlreadyCopied = (1190, "ALREADY_COPIED", "Already Copied", Continue),
    AlreadyCloned = (1210, "ALREADY_CLONED", "Already Cloned", Continue),
    AlreadyRemoved = (1230, "ALREADY_REMOVED", "Already Removed", Continue),
    AlreadyMoved = (1250, "ALREADY_MOVED", "Already Moved", Continue),

    // ============================================================================================
    // SUCCESSFUL OPERATIONS (2xxx)
    // ============================================================================================
    Created = (2010, "CREATED", "Created", Created),
    Uploaded = (2020, "UPLOADED", "Uploaded", Created),
    Updated = (2030, "UPDATED", "Updated", Ok),
    Fetched = (2040, "FETCHED", "Fetched", Ok),
    Deleted = (2050, "DELETED", "Deleted", Ok),
    ResourceRemoved = (2060, "RESOURCE_REMOVED", "Resource Removed", Ok),
    ResourceMoved = (2070, "RESOURCE_MOVED", "Resource Moved", Ok),
    ResourceCopied = (2080, "RESOURCE_COPIED", "Resource Copied", Ok),
    ResourceCloned = (2090, "RESOURCE_CLONED", "Resource Cloned", Ok),
    JwtTokenInitialized = (2110, "JWT_TOKEN_INITIALIZED", "Jwt Token Initialized", Ok),
    TokenInitialized = (2130, "TOKEN_INITIALIZED", "Token Initialized", Ok),
    TokenDeleted = (2150, "TOKEN_DELETED", "Token Deleted", Ok),
    MailSent = (2170, "MAIL_SENT", "Mail Sent", Ok),
    OtpSmsSent = (2190, "OTP_SMS_SENT", "OTP SMS Sent", Ok),
    OtpEmailSent = (2210, "OTP_EMAIL_SENT", "OTP Email Sent", Ok),
    OtpSent = (2230, "OTP_SENT", "OTP Sent", Ok),
    LoggedInSuccess = (2250, "LOGGED_IN_SUCCESS", "Logged In Success", Ok),
    Verified = (2270, "VERIFIED", "Verified", Ok),

    // ============================================================================================
    // CLIENT FAULTS (3xxx)
    // ============================================================================================
    NoSuchEmail = (3010, "NO_SUCH_EMAIL", "No Such Email", BadRequest),
    NoSuchPhone = (3030, "NO_SUCH_PHONE", "No Such Phone", BadRequest),
    NoSuchUser = (3050, "NO_SUCH_USER", "No Such User", BadRequest),
    NoSuchUsername = (3070, "NO_SUCH_USERNAME", "No Such Username", BadRequest),
    NoSuchUserGroup = (3090, "NO_SUCH_USER_GROUP", "No Such User Group", BadRequest),
    EmailInUse = (3110, "EMAIL_IN_USE", "Email In Use", NotAcceptable),
    PhoneInUse = (3130, "PHONE_IN_USE", "Phone In Use", NotAcceptable),
    UsernameInUse = (3150, "USERNAME_IN_USE", "Username In Use", NotAcceptable),
    NoRoleDefined = (3170, "NO_ROLE_DEFINED", "No Role Defined", NotAcceptable),
    NoPermissionDefined = (3190, "NO_PERMISSION_DEFINED", "No Permission Defined", NotAcceptable),
    NoEmailDefined = (3210, "NO_EMAIL_DEFINED", "No Email Defined", NotAcceptable),
    NoPhoneDefined = (3230, "NO_PHONE_DEFINED", "No Phone Defined", NotAcceptable),
    NoUsernameDefined = (3250, "NO_USERNAME_DEFINED", "No Username Defined", NotAcceptable),
    NoAuthenticationDefined = (3270, "NO_AUTHENTICATION_DEFINED", "No Authentication Defined", NotAcceptable),
    FileSizeExceeded = (3290, "FILE_SIZE_EXCEEDED", "File Size Exceeded", BadRequest),
    NumberOfFilesExceeded = (3310, "NUMBER_OF_FILES_EXCEEDED", "Number Of Files Exceeded", BadRequest),
    EmailNotVerified = (3330, "EMAIL_NOT_VERIFIED", "Email Not Verified", BadRequest),
    PhoneNotVerified = (3350, "PHONE_NOT_VERIFIED", "Phone Not Verified", BadRequest),
    UserNotVerified = (3370, "USER_NOT_VERIFIED", "User Not Verified", BadRequest),
    AccountNotVerified = (3390, "ACCOUNT_NOT_VERIFIED", "Account Not Verified", BadRequest),
    NotFound = (3410, "NOT_FOUND", "Not Found", NotFound),
    EntityNotFound = (3430, "ENTITY_NOT_FOUND", "Entity Not Found", NotFound),
    ObjectNotFound = (3450, "OBJECT_NOT_FOUND", "Object Not Found", NotFound),
    ResultNotFound = (3470, "RESULT_NOT_FOUND", "Result Not Found", NotFound),
    ResultNotFoundForQuery = (3490, "RESULT_NOT_FOUND_FOR_QUERY", "Result Not Found For Query", NotFound),
    ValidationException = (3510, "VALIDATION_EXCEPTION", "Validation Exception", BadRequest),
    AlreadyExists = (3530, "ALREADY_EXISTS", "Already Exists", BadRequest),
    ExpiredEmailOtp = (3550, "EXPIRED_EMAIL_OTP", "Expired Email OTP", BadRequest),
    ExpiredPhoneOtp = (3570, "EXPIRED_PHONE_OTP", "Expired Phone OTP", BadRequest),
    ExpiredOtp = (3590, "EXPIRED_OTP", "Expired OTP", BadRequest),
    InvalidEmailOtp = (3610, "INVALID_EMAIL_OTP", "Invalid Email OTP", NotAcceptable),
    InvalidPhoneOtp = (3630, "INVALID_PHONE_OTP", "Invalid Phone OTP", NotAcceptable),
    InvalidOtp = (3650, "INVALID_OTP", "Invalid OTP", NotAcceptable),
    EmailAndPhoneNotVerified = (3670, "EMAIL_AND_PHONE_NOT_VERIFIED", "Email And Phone Not Verified", BadRequest),
    EmailAndPhoneInUse = (3690, "EMAIL_AND_PHONE_IN_USE", "Email And Phone In Use", BadRequest),
    MalformedJsonPayload = (3710, "MALFORMED_JSON_PAYLOAD", "Malformed JSON Payload", BadRequest),
    MalformedRequest = (3730, "MALFORMED_REQUEST", "Malformed Request", BadRequest),
    MalformedHeader = (3750, "MALFORMED_HEADER", "Malformed Header", BadRequest),
    MalformedAuthorization = (3770, "MALFORMED_AUTHORIZATION", "Malformed Authorization", BadRequest),
    RequiredRequestUriParameterMissing = (3790, "REQUIRED_REQUEST_URI_PARAMETER_MISSING", "Required Request URI Parameter Missing", BadRequest),
    NumberFormatException = (3810, "NUMBER_FORMAT_EXCEPTION", "Number Format Exception", BadRequest),
    NameUnavailable = (3830, "NAME_UNAVAILABLE", "Name Unavailable", BadRequest),
    SignedState = (3850, "SIGNED_STATE", "Signed State", BadRequest),
    AlreadyApproved = (3870, "ALREADY_APPROVED", "Already Approved", Ok),
    AlreadyRejected = (3890, "ALREADY_REJECTED", "Already Rejected", Ok),
    AlreadyInvited = (3910, "ALREADY_INVITED", "Already Invited", Ok),
    AlreadyInitiated = (3930, "ALREADY_INITIATED", "Already Initiated", Ok),
    InsufficientCredit = (3950, "INSUFFICIENT_CREDIT", "Insufficient Credit", Ok),

    // ============================================================================================
    // AUTHENTICATION AND AUTHORIZATION FAULTS (4xxx)
    // ============================================================================================
    InvalidJwtToken = (4010, "INVALID_JWT_TOKEN", "Invalid JWT Token", Unauthorized),
    InvalidToken = (4030, "INVALID_TOKEN", "Invalid Token", Unauthorized),
    TamperedJwtToken = (4050, "TAMPERED_JWT_TOKEN", "Tampered JWT Token", Unauthorized),
    TamperedToken = (4070, "TAMPERED_TOKEN", "Tampered Token", Unauthorized),
    InvalidKey = (4090, "INVALID_KEY", "Invalid Key", Unauthorized),
    TamperedKey = (4110, "TAMPERED_KEY", "Tampered Key", Unauthorized),
    InvalidPassword = (4130, "INVALID_PASSWORD", "Invalid Password", Unauthorized),
    InvalidAuthentication = (4150, "INVALID_AUTHENTICATION", "Invalid Authentication", Unauthorized),
    InvalidFingerprint = (4170, "INVALID_FINGERPRINT", "Invalid Fingerprint", Unauthorized),
    InvalidFaceRecognition = (4190, "INVALID_FACE_RECOGNITION", "Invalid Face Recognition", Unauthorized),
    ExpiredJwtToken = (4210, "EXPIRED_JWT_TOKEN", "Expired JWT Token", NotAcceptable),
    ExpiredToken = (4230, "EXPIRED_TOKEN", "Invalid Token", NotAcceptable),
    ExpiredKey = (4250, "EXPIRED_KEY", "Expired Key", NotAcceptable),
    LoginAttemptExceeded = (4270, "LOGIN_ATTEMPT_EXCEEDED", "Login Attempt Exceeded", NotAcceptable),
    LoginDenied = (4290, "LOGIN_DENIED", "Login Denied", NotAcceptable),
    AuthorizationSuspended = (4310, "AUTHORIZATION_SUSPENDED", "Authorization Suspended", NotAcceptable),
    NoValidAuthorization = (4330, "NO_VALID_AUTHORIZATION", "No Valid Authorization", Unauthorized),

    // ============================================================================================
    // SERVER FAULTS (5xxx)
    // ============================================================================================
    InternalDispute = (5010, "INTERNAL_DISPUTE", "Internal Dispute", InternalServerError),
    ConnectionError = (5030, "CONNECTION_ERROR", "Connection error", InternalServerError),
    Conflict = (5050, "CONFLICT", "Conflict", Conflict),
    MailSentError = (5070, "MAIL_SENT_ERROR", "Mail Sent Error", ServiceUnavailable),
    NoUniqueResult = (5090, "NO_UNIQUE_RESULT", "No Unique Result", Conflict),
    OtpEmailSentError = (5110, "OTP_EMAIL_SENT_ERROR", "OTP Email Sent Error", ServiceUnavailable),
    OtpPhoneSentError = (5130, "OTP_PHONE_SENT_ERROR", "OTP Phone Sent Error", ServiceUnavailable),
    OtpSentError = (5150, "OTP_SENT_ERROR", "OTP Sent Error", ServiceUnavailable),
    UploadFailed = (5170, "UPLOAD_FAILED", "Upload Failed", InternalServerError),
    ServerError = (5190, "SERVER_ERROR", "Server Error", InternalServerError),
    TokenGenerateError = (5210, "TOKEN_GENERATE_ERROR", "Token Generate Error", InternalServerError),
}
